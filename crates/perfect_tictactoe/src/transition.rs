//! Board transitions.

use crate::error::ActionError;
use crate::rules::player;
use crate::types::{Board, Move, Square};
use tracing::instrument;

/// Returns the board that results from the player to act marking `action`.
///
/// The mover is read off the board with [`player`]. The input board is left
/// untouched; the result is an independent copy with one square changed.
///
/// # Errors
///
/// Returns [`ActionError::Occupied`] if the target square is not empty.
#[instrument(level = "trace")]
pub fn succ(board: &Board, action: Move) -> Result<Board, ActionError> {
    match board.get(action) {
        Square::Occupied(occupant) => Err(ActionError::Occupied { action, occupant }),
        Square::Empty => Ok(place(board, action)),
    }
}

/// Marks an empty square for the player to act. `action` must be empty.
pub(crate) fn place(board: &Board, action: Move) -> Board {
    board.with(action, Square::Occupied(player(board)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_succ_marks_for_player_to_act() {
        let board = Board::new();
        let next = succ(&board, Move::at(1, 1)).unwrap();
        assert_eq!(next.get(Move::at(1, 1)), Square::Occupied(Player::X));

        let after = succ(&next, Move::at(0, 0)).unwrap();
        assert_eq!(after.get(Move::at(0, 0)), Square::Occupied(Player::O));
        assert_eq!(after.get(Move::at(1, 1)), Square::Occupied(Player::X));
    }

    #[test]
    fn test_succ_leaves_input_unchanged() {
        let board: Board = "X../.O./...".parse().unwrap();
        let before = board;
        let next = succ(&board, Move::at(2, 2)).unwrap();
        assert_eq!(board, before);
        assert_eq!(next.marked(), board.marked() + 1);
    }

    #[test]
    fn test_succ_rejects_occupied() {
        let board: Board = "X../.../...".parse().unwrap();
        let err = succ(&board, Move::at(0, 0)).unwrap_err();
        assert_eq!(
            err,
            ActionError::Occupied {
                action: Move::at(0, 0),
                occupant: Player::X,
            }
        );
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_siblings_do_not_share_state() {
        let parent: Board = "X../.../...".parse().unwrap();
        let left = succ(&parent, Move::at(0, 1)).unwrap();
        let right = succ(&parent, Move::at(0, 2)).unwrap();
        assert!(left.is_empty(Move::at(0, 2)));
        assert!(right.is_empty(Move::at(0, 1)));
        assert_eq!(parent.marked(), 1);
    }
}
