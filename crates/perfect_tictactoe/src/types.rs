//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player marker.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// A cell coordinate: zero-based row and column, both in `0..3`.
///
/// A move is only legal relative to a board whose target square is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    /// Creates a move, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }

    /// Human-readable name of the cell.
    pub fn label(&self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Every transition produces a new board, so a
/// parent board can be expanded into many children without any of them
/// observing the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed as `rows[row][col]`.
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            rows: [[Square::Empty; 3]; 3],
        }
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.rows
    }

    /// Gets the square at the given cell.
    pub fn get(&self, mv: Move) -> Square {
        self.rows[mv.row][mv.col]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Square::Empty
    }

    /// Iterates all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|&s| s == Square::Occupied(player))
            .count()
    }

    /// Counts all marks on the board.
    pub fn marked(&self) -> usize {
        self.squares().filter(|&s| s != Square::Empty).count()
    }

    /// Returns a copy of this board with `mv` set to `square`.
    pub(crate) fn with(mut self, mv: Move, square: Square) -> Self {
        self.rows[mv.row][mv.col] = square;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells (`X`, `O`, or `.`/`_`/`-` for empty) in row-major
    /// order. Whitespace, `/` and `|` may separate rows and are skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                c if c.is_whitespace() || c == '/' || c == '|' => continue,
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                other => return Err(BoardParseError::InvalidCharacter(other)),
            };
            cells.push(square);
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let board = Move::ALL
            .iter()
            .zip(cells)
            .fold(Board::new(), |board, (&mv, square)| board.with(mv, square));
        Ok(board)
    }
}

/// Outcome of a board, from nobody's perspective in particular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{} wins", _0)]
    Won(Player),
    /// Board is full with no line.
    #[display("draw")]
    Draw,
    /// Game is still going.
    #[display("in progress")]
    InProgress,
}

/// Returns the starting board: all nine squares empty.
#[instrument]
pub fn start_state() -> Board {
    Board::new()
}
