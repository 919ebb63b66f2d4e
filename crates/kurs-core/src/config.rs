//! Configuration management for the Kursverwaltung overview

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Collection;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote data service configuration
    #[serde(default)]
    pub data_service: DataServiceConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Remote data service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataServiceConfig {
    /// Base URL of the REST endpoint, without trailing `/apps`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `X-API-Key`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// App identifiers, one per record collection
    #[serde(default)]
    pub apps: AppIds,
}

/// App identifiers of the five record collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppIds {
    /// Instructors app
    #[serde(default)]
    pub dozenten: String,
    /// Participants app
    #[serde(default)]
    pub teilnehmer: String,
    /// Rooms app
    #[serde(default)]
    pub raeume: String,
    /// Courses app
    #[serde(default)]
    pub kurse: String,
    /// Enrollments app
    #[serde(default)]
    pub anmeldungen: String,
}

impl AppIds {
    /// App identifier configured for a collection
    #[must_use]
    pub fn for_collection(&self, collection: Collection) -> &str {
        match collection {
            Collection::Instructors => &self.dozenten,
            Collection::Participants => &self.teilnehmer,
            Collection::Rooms => &self.raeume,
            Collection::Courses => &self.kurse,
            Collection::Enrollments => &self.anmeldungen,
        }
    }

    /// Collections that have no app identifier configured
    #[must_use]
    pub fn missing(&self) -> Vec<Collection> {
        Collection::ALL
            .into_iter()
            .filter(|collection| self.for_collection(*collection).trim().is_empty())
            .collect()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_base_url() -> String {
    "https://my.living-apps.de/rest".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            apps: AppIds::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from `config.*` in the working directory and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (required) or `config.*` (optional),
    /// overlaid with `KURS_` environment variables
    ///
    /// Nested keys use a double underscore, e.g. `KURS_DATA_SERVICE__API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("KURS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
