//! Error types for board transitions and board parsing.

use crate::types::{Move, Player};

/// Error returned when a move cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The target square already holds a mark.
    #[display("Invalid action: square {} is already occupied by {}", action, occupant)]
    Occupied {
        /// The rejected move.
        action: Move,
        /// The player whose mark is in the way.
        occupant: Player,
    },
}

impl std::error::Error for ActionError {}

/// Error returned when text cannot be read as a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark, an empty cell, nor a separator.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCharacter(char),
}

impl std::error::Error for BoardParseError {}
