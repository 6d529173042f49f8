//! Port abstraction for job persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Job, JobDraft, JobId, JobListing, NewJobRecord, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by job repository adapters.
    pub enum JobRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "job repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "job repository query failed: {message}",
    }
}

/// Driven port over the `jobs` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a job and return it with its assigned id.
    async fn insert(&self, record: &NewJobRecord) -> Result<Job, JobRepositoryError>;

    /// Fetch a job by id.
    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>, JobRepositoryError>;

    /// Every job with its employer's name, newest first.
    ///
    /// Jobs whose employer no longer exists are still listed with no name.
    async fn list_with_employers(&self) -> Result<Vec<JobListing>, JobRepositoryError>;

    /// Every job in id order.
    async fn list_all(&self) -> Result<Vec<Job>, JobRepositoryError>;

    /// Jobs posted by one employer, in id order.
    async fn list_by_employer(&self, employer: UserId) -> Result<Vec<Job>, JobRepositoryError>;

    /// Overwrite title and description. Returns `false` when no row matched.
    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<bool, JobRepositoryError>;

    /// Delete a job. Its applications are left in place.
    ///
    /// Returns `false` when no row matched.
    async fn delete(&self, id: JobId) -> Result<bool, JobRepositoryError>;
}
