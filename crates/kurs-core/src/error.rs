//! Error types for the Kursverwaltung overview

use thiserror::Error;

/// Main error type for the Kursverwaltung overview
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Retrieval from the remote data service failed
    #[error("Data service error: {0}")]
    DataService(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}
