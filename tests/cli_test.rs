#![cfg(feature = "std")]

use std::io::Cursor;
use tictactoe::{ConsoleSession, Game, LineKind, Outcome, Player};

fn play(input: &str) -> (anyhow::Result<Outcome>, String) {
    let mut game = Game::new();
    let mut session = ConsoleSession::new(Cursor::new(input.to_string()), Vec::new());
    let result = session.run(&mut game);
    let output = String::from_utf8(session.into_output()).unwrap();
    (result, output)
}

#[test]
fn test_win_transcript() {
    let (result, output) = play("0 0\n1 1\n0 1\n2 2\n0 2\n");
    match result.unwrap() {
        Outcome::Win { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(line.kind(), LineKind::Row(0));
        }
        other => panic!("expected a win, got {:?}", other),
    }
    assert!(output.starts_with("_ _ _ \n_ _ _ \n_ _ _ \n"));
    assert!(output.contains("Player X's turn.\n Please enter a row col to place your tile: "));
    assert!(output.contains("Player O's turn."));
    assert!(output.contains("You chose to place a O onto tile (1, 1)."));
    assert!(output.ends_with("X X X \n_ O _ \n_ _ O \nPlayer X Wins!\n"));
}

#[test]
fn test_draw_transcript() {
    let (result, output) = play("0 0 0 1 0 2 1 1 1 0 1 2 2 1 2 0 2 2\n");
    assert_eq!(result.unwrap(), Outcome::Draw);
    assert!(output.ends_with("The game is a draw!\n"));
}

#[test]
fn test_move_split_across_lines() {
    let (result, output) = play("1\n1\n0\n0\n2 0\n0 1\n0 2\n2 2\n");
    assert!(result.is_ok());
    assert!(output.contains("You chose to place a X onto tile (1, 1)."));
    assert!(output.contains("Player X Wins!"));
}

#[test]
fn test_invalid_moves_reprompt() {
    let (result, output) = play("3 0\n0 -1\n0 0\n0 0\n1 0\n1 1\n2 0\n2 2\n");
    assert!(result.is_ok());
    assert!(output.contains("Invalid move. Row needs to be between 0 and 2 Please try again."));
    assert!(output.contains("Invalid move. Col needs to be between 0 and 2 Please try again."));
    assert!(output.contains("Invalid move. Position already taken. Please try again."));
    // the rejected O move at (0, 0) is retried by O
    assert!(output.contains("You chose to place a O onto tile (1, 0)."));
    assert!(output.contains("Player X Wins!"));
}

#[test]
fn test_non_numeric_input() {
    let (result, output) = play("a b\n0 zz\n0 0\n1 0\n1 1\n2 0\n2 2\n");
    assert!(result.is_ok());
    assert!(output.contains("Invalid input 'a'. Please enter two whole numbers."));
    assert!(output.contains("Invalid input 'zz'. Please enter two whole numbers."));
    assert!(output.contains("Player X Wins!"));
}

#[test]
fn test_input_ends_early() {
    let (result, output) = play("0 0\n");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("input ended before the game finished"));
    assert!(output.contains("X _ _ \n"));
}

#[test]
fn test_finished_game_returns_immediately() {
    let mut game = Game::new();
    for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.play(r, c).unwrap();
    }
    let mut session = ConsoleSession::new(Cursor::new(String::new()), Vec::new());
    let outcome = session.run(&mut game).unwrap();
    assert_eq!(outcome.winner(), Some(Player::X));
}
