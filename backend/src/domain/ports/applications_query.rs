//! Driving port for reading applications.

use async_trait::async_trait;

use crate::domain::{AppliedJob, Error, JobApplicants, JobId, UserId};

/// Use-case port for applicant and applied-job listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationsQuery: Send + Sync {
    /// Applicants for `job`, visible only to the employer who posted it.
    ///
    /// A missing job and a job owned by someone else both fail with
    /// `NotFound`, so employers never see other employers' listings.
    async fn list_applicants(&self, employer: UserId, job: JobId) -> Result<JobApplicants, Error>;

    /// The jobs `jobseeker` has applied to.
    async fn list_applied(&self, jobseeker: UserId) -> Result<Vec<AppliedJob>, Error>;
}
