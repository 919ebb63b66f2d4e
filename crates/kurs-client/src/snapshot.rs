//! Concurrent loading of all five collections

use std::time::Instant;

use kurs_core::Snapshot;
use tracing::{debug, warn};

use crate::error::ClientResult;
use crate::source::DataSource;

/// Fetch all five collections concurrently
///
/// The snapshot is produced only if every fetch succeeds. The first failure
/// is returned and the remaining fetches are dropped.
///
/// # Errors
///
/// Returns the first fetch error.
pub async fn load_snapshot(source: &dyn DataSource) -> ClientResult<Snapshot> {
    let started = Instant::now();

    let result = tokio::try_join!(
        source.instructors(),
        source.participants(),
        source.rooms(),
        source.courses(),
        source.enrollments(),
    );

    match result {
        Ok((instructors, participants, rooms, courses, enrollments)) => {
            debug!(
                source = source.name(),
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                courses = courses.len(),
                enrollments = enrollments.len(),
                "Loaded snapshot"
            );
            Ok(Snapshot {
                instructors,
                participants,
                rooms,
                courses,
                enrollments,
            })
        }
        Err(e) => {
            warn!(source = source.name(), "Snapshot load aborted: {}", e);
            Err(e)
        }
    }
}
