//! Configuration management
//!
//! Runtime knobs for the registry: where the credential store lives and how
//! many attempts each interactive prompt allows. Built-in defaults work with
//! no configuration present; a local `config.toml` overrides them.

use ::config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Default store file name, next to the working directory.
pub const DEFAULT_STORE_PATH: &str = "users.txt";

/// Default retry budget per interactive prompt.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Application configuration
///
/// Tests construct this directly to redirect the store to a temporary file
/// or shrink the attempt budget.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Path of the flat-file credential store
    pub store_path: String,

    /// Maximum attempts per interactive prompt before a flow aborts
    pub max_attempts: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: DEFAULT_STORE_PATH.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional `config.toml`, falling back to
    /// the built-in defaults for any value not set there.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("store_path", DEFAULT_STORE_PATH)?
            .set_default("max_attempts", DEFAULT_MAX_ATTEMPTS as i64)?
            .add_source(File::with_name("config").required(false))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the store path as a `PathBuf`
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.store_path)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.store_path.is_empty() {
            return Err(ConfigError::Message("store_path cannot be empty".into()));
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::Message(
                "max_attempts must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
