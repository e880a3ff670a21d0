//! Game rules for tic-tac-toe.
//!
//! Pure functions that inspect a board: whose turn it is, which moves are
//! legal, who has won, and how a finished game scores. None of them mutate
//! the board they are given.

pub mod draw;
pub mod terminal;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use terminal::{outcome, terminal, utility};
pub use turn::{actions, player};
pub use win::winner;
