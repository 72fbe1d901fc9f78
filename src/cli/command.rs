use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Interactive in-memory phonebook")]
pub struct Cli {
    /// Log verbosity on stderr (off, error, warn, info, debug, trace)
    #[arg(long, env = "PHONEBOOK_LOG", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Supported log levels
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
