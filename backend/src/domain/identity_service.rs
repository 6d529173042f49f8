//! Login and registration service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{LoginService, UserRepository, UserRepositoryError};
use crate::domain::repository_errors::map_user_error;
use crate::domain::{
    Error, LoginCredentials, NewUserRecord, PasswordHash, Registration, User,
};

/// Message shown when registration hits the unique email constraint.
pub const EMAIL_TAKEN_MESSAGE: &str = "An account with this email already exists.";

/// Domain service implementing [`LoginService`] over a [`UserRepository`].
#[derive(Clone)]
pub struct IdentityService<R> {
    users: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> IdentityService<R> {
    /// Create a new identity service.
    pub fn new(users: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }
}

#[async_trait]
impl<R> LoginService for IdentityService<R>
where
    R: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error> {
        let stored = self
            .users
            .find_credentials(credentials.email())
            .await
            .map_err(map_user_error)?;

        let matched = match &stored {
            Some(stored) => stored.password_hash.check(credentials.password()).await,
            None => false,
        };
        match stored {
            Some(stored) if matched => {
                debug!(user_id = %stored.user.id, role = %stored.user.role, "credentials accepted");
                Ok(Some(stored.user))
            }
            _ => {
                debug!("credentials rejected");
                Ok(None)
            }
        }
    }

    async fn register(&self, registration: Registration) -> Result<User, Error> {
        let password_hash = PasswordHash::hash(registration.password.as_str()).await?;
        let record = NewUserRecord {
            name: registration.name,
            email: registration.email,
            password_hash,
            role: registration.role,
            created_at: self.clock.utc(),
        };

        match self.users.insert(&record).await {
            Ok(user) => {
                info!(user_id = %user.id, role = %user.role, "account registered");
                Ok(user)
            }
            Err(UserRepositoryError::EmailTaken { .. }) => Err(Error::conflict(EMAIL_TAKEN_MESSAGE)),
            Err(other) => Err(map_user_error(other)),
        }
    }
}
