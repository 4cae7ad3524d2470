//! Terminal-state detection.

use crate::board::Board;
use crate::common::{Cell, Player};
use crate::line::Line;
use log::trace;

/// Result of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Game is still running.
    InProgress,
    /// `player` holds every cell of `line`.
    Win { player: Player, line: Line },
    /// Board is full and nobody won.
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Evaluate the board: first winning line in row, column, diagonal order,
/// otherwise draw on a full board, otherwise in progress.
pub fn evaluate(board: &Board) -> Outcome {
    for line in board.lines() {
        if let Some(player) = line_owner(board, line) {
            trace!("{} owns {}", player, line);
            return Outcome::Win {
                player,
                line: line.clone(),
            };
        }
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Player holding every cell of `line`, if any.
pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let mut cells = line.cells().iter().map(|c| board.get(c.row, c.col));
    let first = cells.next()??;
    if first == Cell::Empty {
        return None;
    }
    if cells.all(|c| c == Some(first)) {
        first.owner()
    } else {
        None
    }
}
