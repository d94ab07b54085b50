//! Error types for the phonebook converter.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Data anomalies in contacts (missing names, unknown type tags) are not errors; they
//! degrade to defaults inside the conversion engine.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
///
/// All of these are fatal and surface before any contact is converted.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A capacity constant is zero
    #[error("Invalid capacity for {field}: must be greater than zero")]
    InvalidCapacity { field: String },

    /// A realName template cannot be parsed
    #[error("Malformed template {template:?}: {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// A phone replacement rule cannot be applied
    #[error("Invalid phone replacement rule: {0}")]
    InvalidReplacement(String),

    /// Failed to read the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration document
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur while fetching contacts from a directory source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Reading the underlying storage failed
    #[error("Failed to read contacts: {0}")]
    Io(#[from] std::io::Error),

    /// Contact document could not be decoded
    #[error("Failed to decode contacts: {0}")]
    Json(#[from] serde_json::Error),

    /// The source location does not exist
    #[error("Contact source not found: {0}")]
    NotFound(String),

    /// Generic source error with context
    #[error("Contact source error: {0}")]
    Other(String),
}

/// Errors that can occur while building a phonebook.
#[derive(Error, Debug)]
pub enum PhonebookError {
    /// Fetching contacts failed
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A conversion worker did not complete
    #[error("Conversion worker failed: {0}")]
    Worker(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SourceError
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Results with PhonebookError
pub type PhonebookResult<T> = Result<T, PhonebookError>;
