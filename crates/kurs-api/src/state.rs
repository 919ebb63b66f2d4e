//! Application state management

use kurs_client::{DataSource, LivingAppsClient};
use kurs_core::{Config, Result};
use std::fmt;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Source of the record collections
    pub source: Arc<dyn DataSource>,
}

impl AppState {
    /// Create state backed by the configured Living Apps service
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an app identifier is missing or the
    /// HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let client = LivingAppsClient::new(&config.data_service)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create state backed by an arbitrary source
    pub fn with_source(config: Config, source: Arc<dyn DataSource>) -> Self {
        Self { config, source }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("source", &self.source.name())
            .finish()
    }
}
