//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUserRecord, Role, StoredCredentials, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already uses the email address.
        EmailTaken { email: String } => "email already registered: {email}",
    }
}

/// Driven port over the `users` table.
///
/// Mutations are scoped by role: an update or delete aimed at an id whose
/// stored role differs behaves as if the row were missing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return it with its assigned id.
    ///
    /// Fails with [`UserRepositoryError::EmailTaken`] when the unique email
    /// constraint rejects the row.
    async fn insert(&self, record: &NewUserRecord) -> Result<User, UserRepositoryError>;

    /// Look up an account and its password hash by exact email.
    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, UserRepositoryError>;

    /// Fetch an account by id.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// All accounts holding `role`, newest id first.
    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, UserRepositoryError>;

    /// Apply `changes` to the account `id` if it holds `role`.
    ///
    /// Returns `false` when no row matched.
    async fn update(
        &self,
        id: UserId,
        role: Role,
        changes: &UserChanges,
    ) -> Result<bool, UserRepositoryError>;

    /// Delete the account `id` if it holds `role`. Returns `false` when no row matched.
    async fn delete(&self, id: UserId, role: Role) -> Result<bool, UserRepositoryError>;
}
