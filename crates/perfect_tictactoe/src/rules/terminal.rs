//! Game-over detection and scoring.

use super::{draw::is_full, win::winner};
use crate::types::{Board, Outcome, Player};
use tracing::instrument;

/// Returns true once someone has won or no empty square remains.
#[instrument(level = "trace")]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board from X's side: `1` for an X win, `-1` for an
/// O win, `0` otherwise.
///
/// Only meaningful on a terminal board.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classifies the board as won, drawn, or still in progress.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Won(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
