//! Exhaustive minimax search.
//!
//! X maximizes [`utility`] and O minimizes it. [`max_value`] and
//! [`min_value`] call each other until every line of play reaches a terminal
//! board, so the values they return are exact rather than estimated.
//!
//! Moves are tried in the iteration order of [`actions`], which is a
//! `HashSet` and is not stable between runs. When several moves share the
//! best value, the first one seen is kept, so which of them is returned may
//! differ from run to run. The value never does.

use crate::error::ActionError;
use crate::rules::{actions, outcome, player, terminal, utility};
use crate::transition::{place, succ};
use crate::types::{Board, Move, Outcome, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Returns the optimal move for the player to act, or `None` if the game is
/// over.
#[instrument]
pub fn minimax(board: &Board) -> Option<Move> {
    if terminal(board) {
        return None;
    }

    let (value, action) = match player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    };
    debug!(?action, value, "Minimax chose move");
    action
}

/// Best achievable utility for X to move, with the move that achieves it.
///
/// Returns `(utility, None)` on a terminal board. Stops at the first move
/// worth `1`, since nothing beats a forced win.
#[instrument(level = "trace")]
pub fn max_value(board: &Board) -> (i8, Option<Move>) {
    if terminal(board) {
        return (utility(board), None);
    }

    let mut best_value = i8::MIN;
    let mut best_action = None;

    for action in actions(board) {
        let (value, _) = min_value(&place(board, action));
        if value > best_value {
            best_value = value;
            best_action = Some(action);
            if best_value == 1 {
                break;
            }
        }
    }

    (best_value, best_action)
}

/// Best achievable utility for O to move, with the move that achieves it.
///
/// Returns `(utility, None)` on a terminal board. Stops at the first move
/// worth `-1`.
#[instrument(level = "trace")]
pub fn min_value(board: &Board) -> (i8, Option<Move>) {
    if terminal(board) {
        return (utility(board), None);
    }

    let mut best_value = i8::MAX;
    let mut best_action = None;

    for action in actions(board) {
        let (value, _) = max_value(&place(board, action));
        if value < best_value {
            best_value = value;
            best_action = Some(action);
            if best_value == -1 {
                break;
            }
        }
    }

    (best_value, best_action)
}

/// Game-theoretic value of the board under perfect play by both sides.
#[instrument]
pub fn value(board: &Board) -> i8 {
    if terminal(board) {
        return utility(board);
    }

    match player(board) {
        Player::X => max_value(board).0,
        Player::O => min_value(board).0,
    }
}

/// A game played to the end by minimax on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct PlayOut {
    /// Moves in the order they were played.
    moves: Vec<Move>,
    /// The starting board followed by the board after each move.
    boards: Vec<Board>,
    /// How the game ended.
    outcome: Outcome,
}

impl PlayOut {
    /// The last board of the game.
    pub fn final_board(&self) -> Option<&Board> {
        self.boards.last()
    }
}

/// Plays minimax against minimax from `board` until the game ends.
///
/// # Errors
///
/// Propagates [`ActionError`] from [`succ`]. Minimax only proposes empty
/// squares, so this is not expected in practice.
#[instrument]
pub fn play_out(board: &Board) -> Result<PlayOut, ActionError> {
    let mut current = *board;
    let mut moves = Vec::new();
    let mut boards = vec![current];

    while let Some(action) = minimax(&current) {
        let mover = player(&current);
        current = succ(&current, action)?;
        debug!(%action, %mover, "Played move");
        moves.push(action);
        boards.push(current);
    }

    let outcome = outcome(&current);
    debug!(%outcome, plies = moves.len(), "Game finished");
    Ok(PlayOut {
        moves,
        boards,
        outcome,
    })
}
