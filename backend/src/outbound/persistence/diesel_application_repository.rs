//! SQLite-backed `ApplicationRepository` implementation using Diesel ORM.
//!
//! Listings inner-join the referenced user or job, so applications whose
//! counterpart was deleted drop out of view while their rows remain.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ApplicationRepository, ApplicationRepositoryError};
use crate::domain::{
    Applicant, Application, ApplicationId, AppliedJob, JobId, NewApplicationRecord, UserId,
};

use super::diesel_error_mapping::{is_unique_violation, map_basic_diesel_error, map_pool_error};
use super::models::{ApplicationRow, NewApplicationRow};
use super::pool::{DbPool, PoolError};
use super::schema::{applications, jobs, users};

/// Diesel-backed implementation of the `ApplicationRepository` port.
#[derive(Clone)]
pub struct DieselApplicationRepository {
    pool: DbPool,
}

impl DieselApplicationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> ApplicationRepositoryError {
    map_pool_error(error, ApplicationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ApplicationRepositoryError {
    if is_unique_violation(&error) {
        return ApplicationRepositoryError::duplicate();
    }
    map_basic_diesel_error(
        error,
        ApplicationRepositoryError::query,
        ApplicationRepositoryError::connection,
    )
}

#[async_trait]
impl ApplicationRepository for DieselApplicationRepository {
    async fn insert(
        &self,
        record: &NewApplicationRecord,
    ) -> Result<Application, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let stored: ApplicationRow = diesel::insert_into(applications::table)
            .values(&NewApplicationRow {
                job_id: record.job_id.get(),
                jobseeker_id: record.jobseeker_id.get(),
                applied_at: record.applied_at.naive_utc(),
            })
            .returning(ApplicationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Application {
            id: ApplicationId::new(stored.id),
            job_id: JobId::new(stored.job_id),
            jobseeker_id: UserId::new(stored.jobseeker_id),
            applied_at: stored.applied_at.and_utc(),
        })
    }

    async fn list_for_job(&self, job: JobId) -> Result<Vec<Applicant>, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<(i64, i64, String, String, NaiveDateTime)> = applications::table
            .inner_join(users::table.on(users::id.eq(applications::jobseeker_id)))
            .filter(applications::job_id.eq(job.get()))
            .order((applications::applied_at.asc(), applications::id.asc()))
            .select((
                applications::id,
                applications::jobseeker_id,
                users::name,
                users::email,
                applications::applied_at,
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, jobseeker_id, name, email, applied_at)| Applicant {
                application_id: ApplicationId::new(id),
                jobseeker_id: UserId::new(jobseeker_id),
                name,
                email,
                applied_at: applied_at.and_utc(),
            })
            .collect())
    }

    async fn list_for_jobseeker(
        &self,
        jobseeker: UserId,
    ) -> Result<Vec<AppliedJob>, ApplicationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<(i64, i64, String, NaiveDateTime)> = applications::table
            .inner_join(jobs::table.on(jobs::id.eq(applications::job_id)))
            .filter(applications::jobseeker_id.eq(jobseeker.get()))
            .order((applications::applied_at.asc(), applications::id.asc()))
            .select((
                applications::id,
                applications::job_id,
                jobs::title,
                applications::applied_at,
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, job_id, title, applied_at)| AppliedJob {
                application_id: ApplicationId::new(id),
                job_id: JobId::new(job_id),
                title,
                applied_at: applied_at.and_utc(),
            })
            .collect())
    }
}
