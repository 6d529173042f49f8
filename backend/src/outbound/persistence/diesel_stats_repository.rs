//! SQLite-backed `StatsRepository` implementation using Diesel ORM.
//!
//! Windows are translated into half-open timestamp ranges on `created_at`,
//! which is stored as naive UTC.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StatsRepository, StatsRepositoryError};
use crate::domain::{DateWindow, StatsEntity};

use super::diesel_error_mapping::{map_basic_diesel_error, map_pool_error};
use super::pool::{DbPool, PoolError};
use super::schema::{jobs, users};

/// Diesel-backed implementation of the `StatsRepository` port.
#[derive(Clone)]
pub struct DieselStatsRepository {
    pool: DbPool,
}

impl DieselStatsRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> StatsRepositoryError {
    map_pool_error(error, StatsRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> StatsRepositoryError {
    map_basic_diesel_error(error, StatsRepositoryError::query, StatsRepositoryError::connection)
}

fn bounds(window: Option<DateWindow>) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
    match window {
        Some(window) => {
            let (from, until) = window.timestamp_bounds();
            (Some(from), until)
        }
        None => (None, None),
    }
}

#[async_trait]
impl StatsRepository for DieselStatsRepository {
    async fn count(
        &self,
        entity: StatsEntity,
        window: Option<DateWindow>,
    ) -> Result<u64, StatsRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let (from, until) = bounds(window);

        let count: i64 = match entity.role() {
            None => {
                let mut query = jobs::table.into_boxed();
                if let Some(from) = from {
                    query = query.filter(jobs::created_at.ge(from));
                }
                if let Some(until) = until {
                    query = query.filter(jobs::created_at.lt(until));
                }
                query.count().get_result::<i64>(&mut conn).await
            }
            Some(role) => {
                let mut query = users::table
                    .filter(users::role.eq(role.as_str()))
                    .into_boxed();
                if let Some(from) = from {
                    query = query.filter(users::created_at.ge(from));
                }
                if let Some(until) = until {
                    query = query.filter(users::created_at.lt(until));
                }
                query.count().get_result::<i64>(&mut conn).await
            }
        }
        .map_err(map_diesel_error)?;

        u64::try_from(count).map_err(|_| StatsRepositoryError::query("negative row count"))
    }
}
