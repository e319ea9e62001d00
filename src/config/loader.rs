//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RedirectorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "redirector.toml";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RedirectorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RedirectorConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the default config file if present, falling back to built-in defaults.
pub fn load_or_default() -> Result<RedirectorConfig, ConfigError> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    if path.exists() {
        load_config(path)
    } else {
        Ok(RedirectorConfig::default())
    }
}
