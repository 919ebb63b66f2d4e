//! Record source trait

use async_trait::async_trait;
use kurs_core::{Course, Enrollment, Instructor, Participant, Room};

use crate::error::ClientResult;

/// Read access to the five record collections
///
/// Implementations are shared between request handlers, so every method takes
/// `&self`. Each call fetches the whole collection; there is no paging.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// All instructors
    async fn instructors(&self) -> ClientResult<Vec<Instructor>>;

    /// All participants
    async fn participants(&self) -> ClientResult<Vec<Participant>>;

    /// All rooms
    async fn rooms(&self) -> ClientResult<Vec<Room>>;

    /// All courses
    async fn courses(&self) -> ClientResult<Vec<Course>>;

    /// All enrollments
    async fn enrollments(&self) -> ClientResult<Vec<Enrollment>>;

    /// Source name for logging
    fn name(&self) -> &str;
}
