//! Driving port for login and registration use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. This makes HTTP handler tests deterministic because they
//! can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, User};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the matching user.
    ///
    /// Unknown emails and wrong passwords both yield `Ok(None)`; errors are
    /// reserved for store failures.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Option<User>, Error>;

    /// Create an account, hashing the password before it is stored.
    ///
    /// A duplicate email fails with [`crate::domain::ErrorCode::Conflict`].
    async fn register(&self, registration: Registration) -> Result<User, Error>;
}
