//! Game board state: an N×N grid of cells and its candidate lines.

use crate::common::{BoardError, Cell, Player};
use crate::config::BOARD_SIZE;
use crate::line::{candidate_lines, Line};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};

/// Square grid of cells. Dimensions never change after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    lines: Vec<Line>,
}

impl Board {
    /// Create an all-empty board of side `size`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let area = match size.checked_mul(size) {
            Some(area) if size > 0 => area,
            _ => return Err(BoardError::InvalidBoardSize(size)),
        };
        trace!("creating {}x{} board", size, size);
        Ok(Board {
            size,
            cells: vec![Cell::Empty; area],
            lines: candidate_lines(size),
        })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Candidate winning lines in evaluation order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns `true` when both coordinates fall in [0, N).
    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// Cell at (row, col), or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Returns `true` when (row, col) is on the board and unmarked.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Mark (row, col) for `player`. The cell must be on the board and empty.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let idx = self
            .index(row, col)
            .ok_or(BoardError::OutOfBounds { row, col })?;
        if !self.cells[idx].is_empty() {
            return Err(BoardError::AlreadyOccupied { row, col });
        }
        self.cells[idx] = player.to_cell();
        debug!("{} placed at ({}, {})", player, row, col);
        Ok(())
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marked cells.
    pub fn marked(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Rows of cells from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            size: BOARD_SIZE,
            cells: vec![Cell::Empty; BOARD_SIZE * BOARD_SIZE],
            lines: candidate_lines(BOARD_SIZE),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ size: {}, cells:\n{}}}", self.size, self)
    }
}
