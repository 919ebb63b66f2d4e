//! Core types and utilities for the Kursverwaltung overview

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod record_ref;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, LoggingConfig};
pub use error::{Error, Result};
pub use record_ref::{RecordRef, extract_record_id};
pub use types::{
    Collection, Course, Enrollment, Instructor, Participant, Record, RecordId, Room, Snapshot,
};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level. The output is JSON
/// unless the configured format is `text`.
///
/// # Errors
///
/// Returns an error if the level is not a valid filter or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| Error::Configuration {
            message: format!("invalid log level '{}': {e}", config.level),
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.format.eq_ignore_ascii_case("text") {
        registry.with(fmt::layer()).try_init()
    } else {
        registry.with(fmt::layer().json()).try_init()
    };

    installed.map_err(|e| Error::Other(format!("Failed to initialize logging: {e}")))
}
