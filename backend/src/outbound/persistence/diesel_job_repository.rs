//! SQLite-backed `JobRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{JobRepository, JobRepositoryError};
use crate::domain::{Job, JobDraft, JobId, JobListing, NewJobRecord, UserId};

use super::diesel_error_mapping::{map_basic_diesel_error, map_pool_error};
use super::models::{JobRow, JobUpdate, NewJobRow};
use super::pool::{DbPool, PoolError};
use super::schema::{jobs, users};

/// Diesel-backed implementation of the `JobRepository` port.
#[derive(Clone)]
pub struct DieselJobRepository {
    pool: DbPool,
}

impl DieselJobRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> JobRepositoryError {
    map_pool_error(error, JobRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> JobRepositoryError {
    map_basic_diesel_error(error, JobRepositoryError::query, JobRepositoryError::connection)
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Self {
            id: JobId::new(row.id),
            title: row.title,
            description: row.description,
            employer_id: UserId::new(row.employer_id),
            created_at: row.created_at.and_utc(),
        }
    }
}

#[async_trait]
impl JobRepository for DieselJobRepository {
    async fn insert(&self, record: &NewJobRecord) -> Result<Job, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row = NewJobRow {
            title: &record.title,
            description: &record.description,
            employer_id: record.employer_id.get(),
            created_at: record.created_at.naive_utc(),
        };

        let stored: JobRow = diesel::insert_into(jobs::table)
            .values(&row)
            .returning(JobRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(stored.into())
    }

    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<JobRow> = jobs::table
            .find(id.get())
            .select(JobRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Job::from))
    }

    async fn list_with_employers(&self) -> Result<Vec<JobListing>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<(JobRow, Option<String>)> = jobs::table
            .left_join(users::table.on(users::id.eq(jobs::employer_id)))
            .order((jobs::created_at.desc(), jobs::id.desc()))
            .select((JobRow::as_select(), users::name.nullable()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(job, employer_name)| JobListing {
                job: job.into(),
                employer_name,
            })
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<JobRow> = jobs::table
            .order(jobs::id.asc())
            .select(JobRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn list_by_employer(&self, employer: UserId) -> Result<Vec<Job>, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<JobRow> = jobs::table
            .filter(jobs::employer_id.eq(employer.get()))
            .order(jobs::id.asc())
            .select(JobRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn update(&self, id: JobId, draft: &JobDraft) -> Result<bool, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let affected = diesel::update(jobs::table.find(id.get()))
            .set(&JobUpdate {
                title: &draft.title,
                description: &draft.description,
            })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: JobId) -> Result<bool, JobRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let affected = diesel::delete(jobs::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
