//! Account listing, editing and removal.
//!
//! Serves both the admin management pages and the jobseeker's own profile.
//! Every operation is scoped to one role so an id belonging to another role
//! behaves as a missing account.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::identity_service::EMAIL_TAKEN_MESSAGE;
use crate::domain::ports::{
    AccountUpdate, AccountsCommand, AccountsQuery, UserRepository, UserRepositoryError,
};
use crate::domain::repository_errors::map_user_error;
use crate::domain::{Error, PasswordHash, Role, User, UserChanges, UserId};

/// Domain service implementing the account driving ports.
#[derive(Clone)]
pub struct AccountService<R> {
    users: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new account service.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

/// "`Employer` not found." style message for a missing account.
pub fn account_not_found(role: Role) -> Error {
    Error::not_found(format!("{} not found.", role.label()))
}

async fn hash_if_present(password: Option<&str>) -> Result<Option<PasswordHash>, Error> {
    match password {
        Some(plaintext) if !plaintext.is_empty() => PasswordHash::hash(plaintext).await.map(Some),
        _ => Ok(None),
    }
}

#[async_trait]
impl<R> AccountsQuery for AccountService<R>
where
    R: UserRepository,
{
    async fn find_account(&self, id: UserId, role: Role) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_error)?
            .filter(|user| user.role == role)
            .ok_or_else(|| account_not_found(role))
    }

    async fn list_accounts(&self, role: Role) -> Result<Vec<User>, Error> {
        self.users.list_by_role(role).await.map_err(map_user_error)
    }
}

#[async_trait]
impl<R> AccountsCommand for AccountService<R>
where
    R: UserRepository,
{
    async fn update_account(
        &self,
        id: UserId,
        role: Role,
        update: AccountUpdate,
    ) -> Result<User, Error> {
        let changes = UserChanges {
            password_hash: hash_if_present(update.password.as_deref().map(String::as_str)).await?,
            name: update.name,
            email: update.email,
        };

        let updated = match self.users.update(id, role, &changes).await {
            Ok(updated) => updated,
            Err(UserRepositoryError::EmailTaken { .. }) => {
                return Err(Error::conflict(EMAIL_TAKEN_MESSAGE));
            }
            Err(other) => return Err(map_user_error(other)),
        };
        if !updated {
            return Err(account_not_found(role));
        }

        info!(
            user_id = %id,
            %role,
            password_changed = changes.password_hash.is_some(),
            "account updated"
        );
        self.find_account(id, role).await
    }

    async fn delete_account(&self, id: UserId, role: Role) -> Result<(), Error> {
        if role == Role::Admin {
            return Err(Error::forbidden("Admin accounts cannot be deleted."));
        }
        let deleted = self.users.delete(id, role).await.map_err(map_user_error)?;
        if !deleted {
            return Err(account_not_found(role));
        }
        info!(user_id = %id, %role, "account deleted");
        Ok(())
    }
}
