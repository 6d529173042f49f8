//! Driving port for reading accounts.

use async_trait::async_trait;

use crate::domain::{Error, Role, User, UserId};

/// Use-case port for account listings and lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsQuery: Send + Sync {
    /// Fetch the account `id` holding `role`.
    ///
    /// Missing accounts, and accounts holding another role, fail with
    /// [`crate::domain::ErrorCode::NotFound`].
    async fn find_account(&self, id: UserId, role: Role) -> Result<User, Error>;

    /// Accounts holding `role`, newest id first.
    async fn list_accounts(&self, role: Role) -> Result<Vec<User>, Error>;
}
