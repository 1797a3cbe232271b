use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{Config, LogFormat, Logging, Thresholds};

/// Default file stem looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "stockroom";

/// Loads the application configuration.
///
/// Sources, lowest precedence first:
/// 1. built-in defaults,
/// 2. the given TOML file (required), or `stockroom.toml` in the working directory (optional),
/// 3. environment variables such as `STOCKROOM__THRESHOLDS__CRITICAL_RATIO=0.25`.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("STOCKROOM")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    finish(builder)
}

/// Deserializes and validates an already-built source stack.
fn finish(builder: config::Config) -> Result<Config, ConfigError> {
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let ratio = config.thresholds.critical_ratio;
    if ratio < rust_decimal::Decimal::ZERO || ratio > rust_decimal::Decimal::ONE {
        return Err(ConfigError::ValidationError(format!(
            "thresholds.critical_ratio must be between 0 and 1, got {ratio}"
        )));
    }
    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.level must not be empty".to_string(),
        ));
    }
    Ok(())
}
