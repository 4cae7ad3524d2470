//! Candidate winning lines of an N×N board.

use crate::common::Coord;
use alloc::vec::Vec;
use core::fmt;

/// Which family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right; cells are listed from the top row down.
    AntiDiagonal,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Row(r) => write!(f, "row {}", r),
            LineKind::Column(c) => write!(f, "column {}", c),
            LineKind::Diagonal => write!(f, "top-left diagonal"),
            LineKind::AntiDiagonal => write!(f, "bottom-left diagonal"),
        }
    }
}

/// A fixed sequence of N coordinates checked for uniform occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    kind: LineKind,
    cells: Vec<Coord>,
}

impl Line {
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Builds the 2N+2 candidate lines in evaluation order: rows, columns,
/// top-left diagonal, bottom-left diagonal.
pub fn candidate_lines(n: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * n + 2);
    for r in 0..n {
        lines.push(Line {
            kind: LineKind::Row(r),
            cells: (0..n).map(|c| Coord::new(r, c)).collect(),
        });
    }
    for c in 0..n {
        lines.push(Line {
            kind: LineKind::Column(c),
            cells: (0..n).map(|r| Coord::new(r, c)).collect(),
        });
    }
    lines.push(Line {
        kind: LineKind::Diagonal,
        cells: (0..n).map(|i| Coord::new(i, i)).collect(),
    });
    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        cells: (0..n).map(|i| Coord::new(i, n - 1 - i)).collect(),
    });
    lines
}
