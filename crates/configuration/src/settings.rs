use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the movie catalog lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Path to the SQLite file holding the `Category` and `Movie` tables.
    pub path: PathBuf,
    /// Create an empty database file when `path` does not exist yet.
    /// Off by default so that a mistyped path fails loudly.
    #[serde(default)]
    pub create_if_missing: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// Used when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,
    /// When set, logs go to a daily rolling file in this directory instead of stderr.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The directive string understood by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
