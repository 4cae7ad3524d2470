#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use tictactoe::{init_logging, ConsoleSession, Game, Player};

#[derive(Parser)]
#[command(author, version, about = "Two-player tic-tac-toe on the console", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Which mark moves first.
    #[arg(long, value_enum, default_value_t = FirstPlayer::X)]
    first: FirstPlayer,
    /// Print a JSON report of the finished game as the last line.
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum FirstPlayer {
    X,
    O,
}

#[cfg(feature = "std")]
impl From<FirstPlayer> for Player {
    fn from(p: FirstPlayer) -> Self {
        match p {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut game = Game::with_first(cli.first.into());
    let stdin = io::stdin();
    let mut session = ConsoleSession::new(stdin.lock(), io::stdout());
    session.run(&mut game)?;

    if cli.json {
        if let Some(report) = game.report() {
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}
