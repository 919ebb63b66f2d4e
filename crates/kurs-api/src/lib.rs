//! JSON API server for the Kursverwaltung overview

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use kurs_core::Config;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the router with all routes and request tracing
pub fn build_router(state: Arc<AppState>) -> Router {
    routes::api_routes()
        .merge(routes::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the server configuration and apply command line overrides
///
/// There is no fallback to defaults: a configuration that cannot be loaded is
/// an error.
///
/// # Errors
///
/// Returns a configuration error if the file or an environment value cannot
/// be read or parsed.
pub fn load_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> kurs_core::Result<Config> {
    let mut config = Config::load_from(path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    Ok(config)
}
