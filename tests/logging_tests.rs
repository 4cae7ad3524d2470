#![cfg(feature = "std")]

use log::LevelFilter;
use tictactoe::{init_logging, parse_level, LOG_ENV};

#[test]
fn test_parse_level() {
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
    assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
    assert_eq!(parse_level(None), LevelFilter::Warn);
}

#[test]
fn test_init_twice_keeps_env_level() {
    init_logging();
    init_logging();
    let expected = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    assert_eq!(log::max_level(), expected);
}
