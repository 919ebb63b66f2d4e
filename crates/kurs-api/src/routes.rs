//! API route definitions

use crate::{handlers, state::AppState};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Overview endpoints
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/overview", get(handlers::overview::get_overview))
        .layer(CompressionLayer::new())
}

/// Liveness endpoint
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::health_check))
}
