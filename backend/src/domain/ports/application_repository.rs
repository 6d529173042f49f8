//! Port abstraction for job application persistence.
use async_trait::async_trait;

use crate::domain::{Applicant, Application, AppliedJob, JobId, NewApplicationRecord, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by application repository adapters.
    pub enum ApplicationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "application repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "application repository query failed: {message}",
        /// The jobseeker already has an application for this job.
        Duplicate => "application already exists for this job and jobseeker",
    }
}

/// Driven port over the `applications` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Store an application.
    ///
    /// The `(job_id, jobseeker_id)` uniqueness index turns a repeat into
    /// [`ApplicationRepositoryError::Duplicate`].
    async fn insert(
        &self,
        record: &NewApplicationRecord,
    ) -> Result<Application, ApplicationRepositoryError>;

    /// Applicants for a job joined with their account details, oldest first.
    async fn list_for_job(&self, job: JobId) -> Result<Vec<Applicant>, ApplicationRepositoryError>;

    /// A jobseeker's applications joined with the job title, oldest first.
    ///
    /// Applications whose job has been deleted are omitted.
    async fn list_for_jobseeker(
        &self,
        jobseeker: UserId,
    ) -> Result<Vec<AppliedJob>, ApplicationRepositoryError>;
}
