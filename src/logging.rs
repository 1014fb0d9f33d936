use std::path::Path;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use crate::error::ConfigError;

pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Installs a terminal logger. Fails if a logger was already installed.
pub fn init_logger(log_level: &str) -> Result<(), ConfigError> {
    TermLogger::init(
        parse_level(log_level),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// Installs a logger that writes into the file at `path` (truncated first).
pub fn init_file_logger(log_level: &str, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let log_file = std::fs::File::create(path)?;
    WriteLogger::init(parse_level(log_level), Config::default(), log_file)?;
    Ok(())
}
