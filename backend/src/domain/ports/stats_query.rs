//! Driving port for the admin statistics dashboard.

use async_trait::async_trait;

use crate::domain::{Error, StatsReport};

/// Use-case port returning dashboard counts anchored to the current date.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsQuery: Send + Sync {
    /// Lifetime and windowed counts for jobs, employers and jobseekers.
    async fn dashboard_stats(&self) -> Result<StatsReport, Error>;
}
