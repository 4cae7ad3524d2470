use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tictactoe::{evaluate, validate_move, Game, MoveCheck, Outcome, BOARD_SIZE};

const N: usize = BOARD_SIZE;

/// Play up to `max_moves` random legal moves from a fresh game.
fn random_game(seed: u64, max_moves: usize) -> Game {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new();
    for _ in 0..max_moves {
        if game.is_over() {
            break;
        }
        let empty: Vec<(usize, usize)> = (0..N)
            .flat_map(|r| (0..N).map(move |c| (r, c)))
            .filter(|&(r, c)| game.board().is_empty(r, c))
            .collect();
        let (r, c) = empty[rng.random_range(0..empty.len())];
        game.play(r as isize, c as isize).unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn place_reflects_player(seed in any::<u64>(), moves in 0..9usize, row in 0..N, col in 0..N) {
        let mut game = random_game(seed, moves);
        prop_assume!(!game.is_over() && game.board().is_empty(row, col));
        let player = game.to_move();
        game.play(row as isize, col as isize).unwrap();
        prop_assert!(!game.board().is_empty(row, col));
        prop_assert_eq!(game.board().get(row, col), Some(player.to_cell()));
    }

    #[test]
    fn validation_is_pure(seed in any::<u64>(), moves in 0..10usize, row in -2..5isize, col in -2..5isize) {
        let game = random_game(seed, moves);
        let before = game.board().clone();
        let first = validate_move(row, col, game.board());
        let second = validate_move(row, col, game.board());
        prop_assert_eq!(first, second);
        prop_assert_eq!(game.board(), &before);
    }

    #[test]
    fn off_board_always_out_of_bounds(seed in any::<u64>(), moves in 0..10usize, col in 0..N as isize) {
        let game = random_game(seed, moves);
        prop_assert_eq!(validate_move(-1, col, game.board()), MoveCheck::OutOfBounds);
        prop_assert_eq!(validate_move(N as isize, col, game.board()), MoveCheck::OutOfBounds);
        prop_assert_eq!(validate_move(col, N as isize, game.board()), MoveCheck::OutOfBounds);
    }

    #[test]
    fn evaluation_is_idempotent(seed in any::<u64>(), moves in 0..10usize) {
        let game = random_game(seed, moves);
        let first = evaluate(game.board());
        prop_assert_eq!(&first, &evaluate(game.board()));
        prop_assert_eq!(&first, game.outcome());
    }

    #[test]
    fn finished_games_are_terminal(seed in any::<u64>()) {
        let game = random_game(seed, N * N);
        prop_assert!(game.is_over());
        match game.outcome() {
            Outcome::Win { player, line } => {
                for coord in line.cells() {
                    prop_assert_eq!(game.board().get(coord.row, coord.col), Some(player.to_cell()));
                }
                // the winner made the last move
                let last = game.moves().last().copied().unwrap();
                prop_assert!(line.contains(last));
                prop_assert_eq!(game.board().get(last.row, last.col), Some(player.to_cell()));
            }
            Outcome::Draw => prop_assert!(game.board().is_full()),
            Outcome::InProgress => prop_assert!(false, "game should be over"),
        }
        prop_assert_eq!(game.moves().len(), game.board().marked());
    }
}
