//! Apply workflow and application listings.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::job_service::job_not_found;
use crate::domain::ports::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationsCommand, ApplicationsQuery,
    JobRepository,
};
use crate::domain::repository_errors::{map_application_error, map_job_error};
use crate::domain::{
    Application, AppliedJob, Error, Job, JobApplicants, JobId, NewApplicationRecord, UserId,
};

/// Message shown when a jobseeker applies to the same job twice.
pub const ALREADY_APPLIED_MESSAGE: &str = "You have already applied for this job.";

/// Domain service implementing the application driving ports.
#[derive(Clone)]
pub struct ApplicationService<A, J> {
    applications: Arc<A>,
    jobs: Arc<J>,
    clock: Arc<dyn Clock>,
}

impl<A, J> ApplicationService<A, J> {
    /// Create a new application service.
    pub fn new(applications: Arc<A>, jobs: Arc<J>, clock: Arc<dyn Clock>) -> Self {
        Self {
            applications,
            jobs,
            clock,
        }
    }
}

impl<A, J> ApplicationService<A, J>
where
    J: JobRepository,
{
    async fn require_job(&self, id: JobId) -> Result<Job, Error> {
        self.jobs
            .find_by_id(id)
            .await
            .map_err(map_job_error)?
            .ok_or_else(job_not_found)
    }
}

#[async_trait]
impl<A, J> ApplicationsCommand for ApplicationService<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    async fn apply(&self, jobseeker: UserId, job: JobId) -> Result<Application, Error> {
        self.require_job(job).await?;

        let record = NewApplicationRecord {
            job_id: job,
            jobseeker_id: jobseeker,
            applied_at: self.clock.utc(),
        };
        match self.applications.insert(&record).await {
            Ok(application) => {
                info!(
                    application_id = %application.id,
                    job_id = %job,
                    jobseeker_id = %jobseeker,
                    "application recorded"
                );
                Ok(application)
            }
            Err(ApplicationRepositoryError::Duplicate) => {
                Err(Error::conflict(ALREADY_APPLIED_MESSAGE))
            }
            Err(other) => Err(map_application_error(other)),
        }
    }
}

#[async_trait]
impl<A, J> ApplicationsQuery for ApplicationService<A, J>
where
    A: ApplicationRepository,
    J: JobRepository,
{
    async fn list_applicants(&self, employer: UserId, job: JobId) -> Result<JobApplicants, Error> {
        let job = self.require_job(job).await?;
        if job.employer_id != employer {
            warn!(job_id = %job.id, employer_id = %employer, "applicants requested for another employer's job");
            return Err(job_not_found());
        }
        let applicants = self
            .applications
            .list_for_job(job.id)
            .await
            .map_err(map_application_error)?;
        Ok(JobApplicants { job, applicants })
    }

    async fn list_applied(&self, jobseeker: UserId) -> Result<Vec<AppliedJob>, Error> {
        self.applications
            .list_for_jobseeker(jobseeker)
            .await
            .map_err(map_application_error)
    }
}
