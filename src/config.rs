use clap::Parser;
use dotenv::dotenv;
use log::LevelFilter;

use crate::cli::command::{Cli, LogLevel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
}

impl Config {
    /// Reads `.env` (if any) and the command line.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_cli(&Cli::parse())
    }

    pub fn from_cli(cli: &Cli) -> Self {
        Config {
            log_level: cli.log_level.into(),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
