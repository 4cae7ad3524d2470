#![cfg(feature = "std")]

//! Console front end: reads moves as whitespace-separated integers and
//! prints the board after every turn.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::bail;
use log::debug;

use crate::{
    board::Board,
    common::{MoveCheck, Player},
    evaluator::Outcome,
    game::{Game, PlayError},
};

/// Drives a [`Game`] from a text input stream to a text sink.
pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Consume the session, handing back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play `game` to completion and return its terminal outcome.
    ///
    /// Fails if the input ends before the game does, or on an I/O error.
    pub fn run(&mut self, game: &mut Game) -> anyhow::Result<Outcome> {
        self.print_board(game.board())?;
        loop {
            if game.is_over() {
                return Ok(game.outcome().clone());
            }
            let player = game.to_move();
            let (row, col) = self.read_move(player)?;
            writeln!(
                self.output,
                "You chose to place a {} onto tile ({}, {}).",
                player, row, col
            )?;
            match game.play(row, col) {
                Ok(outcome) => {
                    self.print_board(game.board())?;
                    match &outcome {
                        Outcome::Win { player, line } => {
                            debug!("{} won on {}", player, line);
                            writeln!(self.output, "Player {} Wins!", player)?;
                        }
                        Outcome::Draw => writeln!(self.output, "The game is a draw!")?,
                        Outcome::InProgress => continue,
                    }
                    self.output.flush()?;
                    return Ok(outcome);
                }
                Err(PlayError::Rejected(check)) => {
                    self.report_rejected(check, row, game.board().size())?;
                    self.print_board(game.board())?;
                }
                Err(PlayError::GameOver) => return Ok(game.outcome().clone()),
                Err(err @ PlayError::Board(_)) => return Err(err.into()),
            }
        }
    }

    fn print_board(&mut self, board: &Board) -> anyhow::Result<()> {
        write!(self.output, "{}", board)?;
        self.output.flush()?;
        Ok(())
    }

    fn report_rejected(&mut self, check: MoveCheck, row: isize, size: usize) -> anyhow::Result<()> {
        let max = size - 1;
        match check {
            MoveCheck::OutOfBounds if !(0..size as isize).contains(&row) => writeln!(
                self.output,
                "Invalid move. Row needs to be between 0 and {} Please try again.",
                max
            )?,
            MoveCheck::OutOfBounds => writeln!(
                self.output,
                "Invalid move. Col needs to be between 0 and {} Please try again.",
                max
            )?,
            MoveCheck::AlreadyOccupied => writeln!(
                self.output,
                "Invalid move. Position already taken. Please try again."
            )?,
            MoveCheck::Valid => {}
        }
        Ok(())
    }

    /// Prompt `player` until two integers are read.
    fn read_move(&mut self, player: Player) -> anyhow::Result<(isize, isize)> {
        loop {
            write!(
                self.output,
                "Player {}'s turn.\n Please enter a row col to place your tile: ",
                player
            )?;
            self.output.flush()?;

            let row = match self.next_number()? {
                Ok(n) => n,
                Err(tok) => {
                    self.discard_after(&tok)?;
                    continue;
                }
            };
            let col = match self.next_number()? {
                Ok(n) => n,
                Err(tok) => {
                    self.discard_after(&tok)?;
                    continue;
                }
            };
            return Ok((row, col));
        }
    }

    fn discard_after(&mut self, tok: &str) -> anyhow::Result<()> {
        debug!("discarding input after bad token {:?}", tok);
        self.pending.clear();
        writeln!(
            self.output,
            "Invalid input '{}'. Please enter two whole numbers.",
            tok
        )?;
        Ok(())
    }

    /// Next token parsed as an integer; the raw token comes back on a parse failure.
    fn next_number(&mut self) -> anyhow::Result<Result<isize, String>> {
        let tok = self.next_token()?;
        Ok(tok.parse::<isize>().map_err(|_| tok))
    }

    fn next_token(&mut self) -> anyhow::Result<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input ended before the game finished");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        match self.pending.pop_front() {
            Some(tok) => Ok(tok),
            None => bail!("no input token available"),
        }
    }
}
