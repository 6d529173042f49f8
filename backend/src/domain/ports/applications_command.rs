//! Driving port for applying to jobs.

use async_trait::async_trait;

use crate::domain::{Application, Error, JobId, UserId};

/// Use-case port for the apply workflow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationsCommand: Send + Sync {
    /// Record that `jobseeker` applied to `job` now.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the job does not exist.
    /// - `Conflict` when the jobseeker already applied.
    async fn apply(&self, jobseeker: UserId, job: JobId) -> Result<Application, Error>;
}
