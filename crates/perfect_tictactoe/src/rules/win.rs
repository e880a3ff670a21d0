//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Move, Player, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::at(0, 0), Move::at(0, 1), Move::at(0, 2)],
    [Move::at(1, 0), Move::at(1, 1), Move::at(1, 2)],
    [Move::at(2, 0), Move::at(2, 1), Move::at(2, 2)],
    // Columns
    [Move::at(0, 0), Move::at(1, 0), Move::at(2, 0)],
    [Move::at(0, 1), Move::at(1, 1), Move::at(2, 1)],
    [Move::at(0, 2), Move::at(1, 2), Move::at(2, 2)],
    // Diagonals
    [Move::at(0, 0), Move::at(1, 1), Move::at(2, 2)],
    [Move::at(0, 2), Move::at(1, 1), Move::at(2, 0)],
];

/// Returns the winner of the board, if there is one.
///
/// Returns `Some(player)` if `player` fills any of the eight lines,
/// `None` otherwise. A board where both players hold a line is not a
/// reachable position; the result for one is whichever line is checked first.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
