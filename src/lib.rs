#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod evaluator;
mod game;
mod line;
mod validator;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;

pub use board::*;
pub use common::*;
pub use config::*;
pub use evaluator::*;
pub use game::*;
pub use line::*;
pub use validator::*;
#[cfg(feature = "std")]
pub use console::ConsoleSession;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
