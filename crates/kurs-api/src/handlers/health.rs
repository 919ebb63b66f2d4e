//! Liveness endpoint

/// Answers `OK` while the server is running
///
/// Does not contact the data service.
pub async fn health_check() -> &'static str {
    "OK"
}
