//! Admin dashboard statistics.
//!
//! The report is rebuilt from the store on every request: a lifetime total
//! plus one count per calendar window for each entity. Nothing is cached.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{StatsQuery, StatsRepository};
use crate::domain::repository_errors::map_stats_error;
use crate::domain::{EntityCounts, Error, StatsEntity, StatsReport, StatsWindows};

/// Domain service implementing [`StatsQuery`].
#[derive(Clone)]
pub struct StatsService<S> {
    stats: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> StatsService<S> {
    /// Create a new statistics service.
    pub fn new(stats: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { stats, clock }
    }
}

impl<S> StatsService<S>
where
    S: StatsRepository,
{
    /// Build the report with windows anchored to the UTC date of `now`.
    pub async fn compute_stats(&self, now: DateTime<Utc>) -> Result<StatsReport, Error> {
        let today = now.date_naive();
        let windows = StatsWindows::anchored_at(today);
        debug!(%today, week_start = %windows.weekly.start, "computing dashboard stats");

        Ok(StatsReport {
            jobs: self.entity_counts(StatsEntity::Jobs, &windows).await?,
            employers: self.entity_counts(StatsEntity::Employers, &windows).await?,
            jobseekers: self.entity_counts(StatsEntity::Jobseekers, &windows).await?,
        })
    }

    async fn entity_counts(
        &self,
        entity: StatsEntity,
        windows: &StatsWindows,
    ) -> Result<EntityCounts, Error> {
        let count = |window| async move {
            self.stats
                .count(entity, window)
                .await
                .map_err(map_stats_error)
        };
        Ok(EntityCounts {
            total: count(None).await?,
            daily: count(Some(windows.daily)).await?,
            weekly: count(Some(windows.weekly)).await?,
            monthly: count(Some(windows.monthly)).await?,
            yearly: count(Some(windows.yearly)).await?,
        })
    }
}

#[async_trait]
impl<S> StatsQuery for StatsService<S>
where
    S: StatsRepository,
{
    async fn dashboard_stats(&self) -> Result<StatsReport, Error> {
        self.compute_stats(self.clock.utc()).await
    }
}
