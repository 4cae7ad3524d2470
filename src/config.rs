use crate::common::Player;

/// Side length of the board used by a standard game.
pub const BOARD_SIZE: usize = 3;

/// Symbol printed for an empty cell.
pub const EMPTY_SYMBOL: char = '_';
pub const X_SYMBOL: char = 'X';
pub const O_SYMBOL: char = 'O';

/// Player who moves first unless told otherwise.
pub const FIRST_PLAYER: Player = Player::X;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "TICTACTOE_LOG";
