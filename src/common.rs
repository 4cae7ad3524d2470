//! Common types for tic-tac-toe: players, cells, coordinates and errors.

use crate::config::{EMPTY_SYMBOL, O_SYMBOL, X_SYMBOL};
use core::fmt;

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Cell state left behind by this player's move.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        self.to_cell().symbol()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Printable symbol for the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::X => X_SYMBOL,
            Cell::O => O_SYMBOL,
        }
    }

    /// Player holding the cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// In-bounds (row, col) position on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Classification of a proposed move against the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCheck {
    /// Both coordinates are in range and the cell is empty.
    Valid,
    /// A coordinate falls outside [0, N).
    OutOfBounds,
    /// The target cell already holds a mark.
    AlreadyOccupied,
}

impl MoveCheck {
    pub fn is_valid(self) -> bool {
        self == MoveCheck::Valid
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Board requested with a side length of zero, or one whose cell count overflows.
    InvalidBoardSize(usize),
    /// Row or column index is outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Target cell is already taken.
    AlreadyOccupied { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidBoardSize(0) => {
                write!(f, "Invalid board size 0: must be at least 1")
            }
            BoardError::InvalidBoardSize(n) => {
                write!(f, "Invalid board size {}: too many cells", n)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            BoardError::AlreadyOccupied { row, col } => {
                write!(f, "Position ({}, {}) is already taken", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
