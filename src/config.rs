//! Configuration module for keyward.

use serde::Deserialize;
use std::path::Path;

use crate::{KeywardError, Result};

/// Environment variable overriding `store.path`.
pub const PASSWD_PATH_ENV: &str = "KEYWARD_PASSWD_PATH";

/// Credential store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the password file.
    #[serde(default = "default_passwd_path")]
    pub path: String,
}

fn default_passwd_path() -> String {
    "passwd".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_passwd_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/keyward.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Credential store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(KeywardError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| KeywardError::Config(format!("parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `KEYWARD_PASSWD_PATH`: Override the password file path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(PASSWD_PATH_ENV) {
            if !path.is_empty() {
                self.store.path = path;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the password file path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.store.path.trim().is_empty() {
            return Err(KeywardError::Config(
                "store.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
