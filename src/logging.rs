#![cfg(feature = "std")]

use crate::config::LOG_ENV;
use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // stdout belongs to the game
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Parse a level filter, falling back to `warn`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging with a level taken from the `TICTACTOE_LOG` environment variable.
/// Defaults to `warn` if the variable is not set or invalid.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
