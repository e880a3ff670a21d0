//! Perfect-play tic-tac-toe.
//!
//! This crate models a 3x3 tic-tac-toe board and solves it exactly with
//! minimax search.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Move`], [`Outcome`]
//! - **Rules**: [`player`], [`actions`], [`winner`], [`terminal`], [`utility`], [`outcome`]
//! - **Transition**: [`succ`] returns a new board and never mutates its input
//! - **Search**: [`minimax`] via the mutually recursive [`max_value`] / [`min_value`]
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{minimax, play_out, start_state, Outcome};
//!
//! let board = start_state();
//! assert!(minimax(&board).is_some());
//!
//! let game = play_out(&board).unwrap();
//! assert_eq!(*game.outcome(), Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod rules;
mod search;
mod transition;
mod types;

pub use error::{ActionError, BoardParseError};
pub use rules::win::LINES;
pub use rules::{actions, is_full, outcome, player, terminal, utility, winner};
pub use search::{PlayOut, max_value, min_value, minimax, play_out, value};
pub use transition::succ;
pub use types::{Board, Move, Outcome, Player, Square, start_state};
