//! Overview endpoint

use crate::state::AppState;
use axum::{extract::State, response::Json};
use chrono::{Local, NaiveDateTime};
use kurs_client::{DataSource, load_snapshot};
use kurs_stats::Overview;
use std::sync::Arc;
use tracing::{error, info};

/// Overview of all collections as of now
///
/// Always answers 200. When any collection cannot be fetched the failure is
/// logged and the overview of an empty snapshot is returned.
pub async fn get_overview(State(state): State<Arc<AppState>>) -> Json<Overview> {
    let now = Local::now().naive_local();
    Json(load_overview(state.source.as_ref(), now).await)
}

/// Fetch a snapshot and derive its overview at `now`
pub async fn load_overview(source: &dyn DataSource, now: NaiveDateTime) -> Overview {
    match load_snapshot(source).await {
        Ok(snapshot) => {
            let overview = Overview::derive(&snapshot, now);
            info!(
                active_courses = overview.headline.active_courses,
                upcoming_courses = overview.headline.upcoming_courses,
                enrollments = overview.payments.total,
                "Derived overview"
            );
            overview
        }
        Err(e) => {
            error!("Failed to load overview data from {}: {}", source.name(), e);
            Overview::empty(now)
        }
    }
}
