//! In-memory data source for testing

use async_trait::async_trait;
use kurs_core::{Collection, Course, Enrollment, Instructor, Participant, Room, Snapshot};
use tokio::time::{Duration, sleep};

use crate::error::{ClientError, ClientResult};
use crate::source::DataSource;

/// [`DataSource`] serving a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct MockDataSource {
    snapshot: Snapshot,
    delay_ms: u64,
    failing: Option<Collection>,
}

impl MockDataSource {
    /// Serve the given snapshot
    pub const fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            delay_ms: 0,
            failing: None,
        }
    }

    /// Delay every fetch by `delay_ms`
    #[must_use]
    pub const fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Fail fetches of `collection`
    #[must_use]
    pub const fn with_failure(mut self, collection: Collection) -> Self {
        self.failing = Some(collection);
        self
    }

    async fn serve<T: Clone>(&self, collection: Collection, records: &[T]) -> ClientResult<Vec<T>> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }

        if self.failing == Some(collection) {
            return Err(ClientError::unavailable(format!("mock failure for {collection}")));
        }

        Ok(records.to_vec())
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn instructors(&self) -> ClientResult<Vec<Instructor>> {
        self.serve(Collection::Instructors, &self.snapshot.instructors)
            .await
    }

    async fn participants(&self) -> ClientResult<Vec<Participant>> {
        self.serve(Collection::Participants, &self.snapshot.participants)
            .await
    }

    async fn rooms(&self) -> ClientResult<Vec<Room>> {
        self.serve(Collection::Rooms, &self.snapshot.rooms).await
    }

    async fn courses(&self) -> ClientResult<Vec<Course>> {
        self.serve(Collection::Courses, &self.snapshot.courses).await
    }

    async fn enrollments(&self) -> ClientResult<Vec<Enrollment>> {
        self.serve(Collection::Enrollments, &self.snapshot.enrollments)
            .await
    }

    fn name(&self) -> &str {
        "mock"
    }
}
