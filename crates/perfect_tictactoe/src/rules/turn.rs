//! Turn order and legal moves.

use crate::types::{Board, Move, Player};
use std::collections::HashSet;
use tracing::instrument;

/// Returns the player to act.
///
/// X moves first, so O is to act exactly when X has placed more marks.
/// On a finished board the answer carries no meaning.
#[instrument(level = "trace")]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Returns every empty cell as a legal move.
///
/// The result is an unordered set. Callers that iterate it (the minimax
/// search does) see an order that may change from run to run.
#[instrument(level = "trace")]
pub fn actions(board: &Board) -> HashSet<Move> {
    Move::ALL
        .iter()
        .copied()
        .filter(|&mv| board.is_empty(mv))
        .collect()
}
