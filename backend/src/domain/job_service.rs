//! Job posting and moderation service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{JobRepository, JobsCommand, JobsQuery};
use crate::domain::repository_errors::map_job_error;
use crate::domain::{Error, Job, JobDraft, JobId, JobListing, NewJobRecord, UserId};

/// Domain service implementing the job driving ports.
#[derive(Clone)]
pub struct JobService<J> {
    jobs: Arc<J>,
    clock: Arc<dyn Clock>,
}

impl<J> JobService<J> {
    /// Create a new job service.
    pub fn new(jobs: Arc<J>, clock: Arc<dyn Clock>) -> Self {
        Self { jobs, clock }
    }
}

/// Error for an edit, delete, apply or applicants target that does not exist.
pub fn job_not_found() -> Error {
    Error::not_found("Job not found.")
}

#[async_trait]
impl<J> JobsQuery for JobService<J>
where
    J: JobRepository,
{
    async fn find_job(&self, id: JobId) -> Result<Job, Error> {
        self.jobs
            .find_by_id(id)
            .await
            .map_err(map_job_error)?
            .ok_or_else(job_not_found)
    }

    async fn list_jobs_with_employers(&self) -> Result<Vec<JobListing>, Error> {
        self.jobs.list_with_employers().await.map_err(map_job_error)
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, Error> {
        self.jobs.list_all().await.map_err(map_job_error)
    }

    async fn list_employer_jobs(&self, employer: UserId) -> Result<Vec<Job>, Error> {
        self.jobs
            .list_by_employer(employer)
            .await
            .map_err(map_job_error)
    }
}

#[async_trait]
impl<J> JobsCommand for JobService<J>
where
    J: JobRepository,
{
    async fn post_job(&self, employer: UserId, draft: JobDraft) -> Result<Job, Error> {
        let record = NewJobRecord {
            title: draft.title,
            description: draft.description,
            employer_id: employer,
            created_at: self.clock.utc(),
        };
        let job = self.jobs.insert(&record).await.map_err(map_job_error)?;
        info!(job_id = %job.id, employer_id = %employer, "job posted");
        Ok(job)
    }

    async fn update_job(&self, id: JobId, draft: JobDraft) -> Result<Job, Error> {
        if !self.jobs.update(id, &draft).await.map_err(map_job_error)? {
            return Err(job_not_found());
        }
        info!(job_id = %id, "job updated");
        self.find_job(id).await
    }

    async fn delete_job(&self, id: JobId) -> Result<(), Error> {
        if !self.jobs.delete(id).await.map_err(map_job_error)? {
            return Err(job_not_found());
        }
        info!(job_id = %id, "job deleted");
        Ok(())
    }
}
