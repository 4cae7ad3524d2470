use crate::{
    board::Board,
    common::{BoardError, Coord, MoveCheck, Player},
    config::FIRST_PLAYER,
    evaluator::{evaluate, Outcome},
    validator::validate_move,
};
use alloc::vec::Vec;
use core::fmt;
use log::debug;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    /// The game already reached a win or draw.
    GameOver,
    /// The move failed validation.
    Rejected(MoveCheck),
    /// The board refused a move that passed validation.
    Board(BoardError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::GameOver => write!(f, "Game is already over"),
            PlayError::Rejected(MoveCheck::OutOfBounds) => write!(f, "Move is outside the board"),
            PlayError::Rejected(MoveCheck::AlreadyOccupied) => {
                write!(f, "Position already taken")
            }
            PlayError::Rejected(MoveCheck::Valid) => write!(f, "Move was rejected"),
            PlayError::Board(err) => write!(f, "{}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayError {}

impl From<BoardError> for PlayError {
    fn from(err: BoardError) -> Self {
        PlayError::Board(err)
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameReport {
    pub outcome: Outcome,
    pub moves: usize,
}

/// One game: owns the board, tracks whose turn it is and the current outcome.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Coord>,
}

impl Game {
    /// Standard game with an empty board and X to move.
    pub fn new() -> Self {
        Self::with_first(FIRST_PLAYER)
    }

    pub fn with_first(first: Player) -> Self {
        Self {
            board: Board::default(),
            to_move: first,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose move is next. After a terminal move this stays on the
    /// player who made it.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Accepted moves in order.
    pub fn moves(&self) -> &[Coord] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Classify a move for the current board without applying it.
    pub fn check(&self, row: isize, col: isize) -> MoveCheck {
        validate_move(row, col, &self.board)
    }

    /// Apply a move for the player to move and return the new outcome.
    pub fn play(&mut self, row: isize, col: isize) -> Result<Outcome, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        match self.check(row, col) {
            MoveCheck::Valid => {}
            rejected => return Err(PlayError::Rejected(rejected)),
        }
        let (row, col) = (row as usize, col as usize);
        self.board.place(row, col, self.to_move)?;
        self.history.push(Coord::new(row, col));
        self.outcome = evaluate(&self.board);
        debug!("move {} by {}: {:?}", self.history.len(), self.to_move, self.outcome);
        if !self.outcome.is_terminal() {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.outcome.clone())
    }

    /// Report for a finished game.
    pub fn report(&self) -> Option<GameReport> {
        self.is_over().then(|| GameReport {
            outcome: self.outcome.clone(),
            moves: self.history.len(),
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
