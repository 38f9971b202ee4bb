//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error from the underlying config crate
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable {var}: {message}")]
    ParseError { var: String, message: String },
}

/// Errors from semantic validation of loaded configuration
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required value is missing for the current environment
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    /// The configured port is not usable
    #[error("Invalid port: {0} (must be between 1 and 65535)")]
    InvalidPort(u16),

    /// A timeout value is out of its accepted range
    #[error("Invalid timeout for {field}: {value}s (must be between 1 and {max})")]
    InvalidTimeout {
        field: String,
        value: u64,
        max: u64,
    },

    /// A URL value could not be accepted
    #[error("Invalid URL for {field}: {message}")]
    InvalidUrl { field: String, message: String },
}
