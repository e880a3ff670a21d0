//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use perfect_tictactoe::Board;

/// Perfect Tic-Tac-Toe - exact minimax solver for 3x3 boards
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` (or `_`/`-`)
/// for empty. Rows may be separated with `/`, `|` or whitespace, e.g.
/// `XO./.X./...`.
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Exact minimax solver for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to act
    BestMove {
        /// Board to solve
        board: Board,

        /// Print the answer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the value of a board under perfect play (1 = X wins, 0 = draw, -1 = O wins)
    Value {
        /// Board to evaluate
        board: Board,
    },

    /// Play minimax against itself until the game ends
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        from: Option<Board>,
    },
}
