//! Driving port for job listings.

use async_trait::async_trait;

use crate::domain::{Error, Job, JobId, JobListing, UserId};

/// Use-case port for reading jobs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobsQuery: Send + Sync {
    /// Fetch one job, failing with `NotFound` when it does not exist.
    async fn find_job(&self, id: JobId) -> Result<Job, Error>;

    /// Admin view: all jobs with employer names, newest first.
    async fn list_jobs_with_employers(&self) -> Result<Vec<JobListing>, Error>;

    /// Jobseeker view: all jobs.
    async fn list_jobs(&self) -> Result<Vec<Job>, Error>;

    /// Employer view: jobs posted by `employer`.
    async fn list_employer_jobs(&self, employer: UserId) -> Result<Vec<Job>, Error>;
}
