//! Port for the counting queries behind the admin dashboard.
use async_trait::async_trait;

use crate::domain::{DateWindow, StatsEntity};

use super::define_port_error;

define_port_error! {
    /// Errors raised by statistics repository adapters.
    pub enum StatsRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "stats repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "stats repository query failed: {message}",
    }
}

/// Read-only counting port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Count rows of `entity` created inside `window`, or all rows when
    /// `window` is `None`.
    async fn count(
        &self,
        entity: StatsEntity,
        window: Option<DateWindow>,
    ) -> Result<u64, StatsRepositoryError>;
}
