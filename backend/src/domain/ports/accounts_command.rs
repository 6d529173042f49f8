//! Driving port for editing and removing accounts.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::{Error, Role, User, UserId};

/// Submitted account edit.
///
/// `password: None` keeps the stored hash; `Some` re-hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUpdate {
    pub name: String,
    pub email: String,
    pub password: Option<Zeroizing<String>>,
}

/// Use-case port for account mutations performed by admins and by users
/// on their own profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsCommand: Send + Sync {
    /// Apply `update` to the account `id` holding `role` and return the
    /// freshly stored account.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no account with that id and role exists.
    /// - `Conflict` when the new email belongs to another account.
    async fn update_account(
        &self,
        id: UserId,
        role: Role,
        update: AccountUpdate,
    ) -> Result<User, Error>;

    /// Remove the account `id` holding `role`.
    ///
    /// Admin accounts are never deleted (`Forbidden`).
    async fn delete_account(&self, id: UserId, role: Role) -> Result<(), Error>;
}
