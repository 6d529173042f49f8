//! Driving port for posting, editing and deleting jobs.

use async_trait::async_trait;

use crate::domain::{Error, Job, JobDraft, JobId, UserId};

/// Use-case port for job mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobsCommand: Send + Sync {
    /// Post a job owned by `employer`, stamped with the current time.
    async fn post_job(&self, employer: UserId, draft: JobDraft) -> Result<Job, Error>;

    /// Replace a job's title and description. `NotFound` when missing.
    async fn update_job(&self, id: JobId, draft: JobDraft) -> Result<Job, Error>;

    /// Delete a job. `NotFound` when missing. Applications are kept.
    async fn delete_job(&self, id: JobId) -> Result<(), Error>;
}
