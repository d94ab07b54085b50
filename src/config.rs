//! Process settings for the phonebook converter.
//!
//! This module loads and validates settings from environment variables. Conversion
//! rules themselves live in the JSON configuration file the settings point to
//! (see [`crate::conversion::ConfigFile`]).

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Settings for one converter run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the conversion configuration document
    pub config_path: PathBuf,

    /// Path of the contacts document
    pub contacts_path: PathBuf,

    /// Concurrent conversion workers (default: 4)
    pub workers: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load settings from environment variables.
    ///
    /// Required environment variables:
    /// - `PHONEBOOK_CONFIG`: Path of the conversion configuration (JSON)
    /// - `PHONEBOOK_CONTACTS`: Path of the contacts document (JSON)
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_WORKERS`: Concurrent conversion workers (default: 4)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; dotenvy does not print to stdout
        let _ = dotenvy::dotenv();

        let config_path = Self::require_path("PHONEBOOK_CONFIG")?;
        let contacts_path = Self::require_path("PHONEBOOK_CONTACTS")?;

        let workers = Self::parse_env_usize("PHONEBOOK_WORKERS", 4)?;
        if workers == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PHONEBOOK_WORKERS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            config_path,
            contacts_path,
            workers,
            log_level,
        })
    }

    /// Read a required, non-blank path variable.
    fn require_path(var_name: &str) -> ConfigResult<PathBuf> {
        let value = env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        Ok(PathBuf::from(value))
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            config_path: PathBuf::from("config.json"),
            contacts_path: PathBuf::from("contacts.json"),
            workers: 4,
            log_level: "info".to_string(),
        }
    }
}
