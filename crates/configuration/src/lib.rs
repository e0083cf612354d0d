use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DatabaseSettings, LogLevel, LoggingSettings};

/// Default location of the catalog when nothing else is configured.
pub const DEFAULT_DATABASE_PATH: &str = "movies.sqlite";

/// Prefix for environment overrides, e.g. `MOVIES_DATABASE__PATH`.
pub const ENV_PREFIX: &str = "MOVIES";

/// Loads the application configuration.
///
/// Sources are layered, later ones winning: built-in defaults, the TOML file
/// at `path` (optional, skipped if it does not exist), then `MOVIES_*`
/// environment variables. The result is deserialized into our strongly-typed
/// `Config` struct and validated.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .set_default("database.path", DEFAULT_DATABASE_PATH)?
        .set_default("database.create_if_missing", false)?
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(database = %config.database.path.display(), "Configuration loaded.");
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.database.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "database.path must not be empty".to_string(),
        ));
    }
    Ok(())
}
