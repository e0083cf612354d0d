use thiserror::Error;

/// Failures while assembling the application `Config`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration sources: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),
}
