//! Authentication primitives: login credentials, registrations and the
//! identity record kept in the session.
//!
//! Form values reach the domain unchanged: whatever registration stored is
//! what login compares against.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::role::Role;
use super::user::{User, UserId};

/// Login form values, kept exactly as submitted.
///
/// Registration stores the email and password verbatim, so login must not
/// trim or reject anything the registration form accepted. A blank or
/// padded value simply has to match what was registered.
///
/// # Examples
/// ```
/// use jobboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new(" ada@example.com ", "");
/// assert_eq!(creds.email(), " ada@example.com ");
/// assert_eq!(creds.password(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture credentials from raw form inputs.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        }
    }

    /// Email used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// A new account request. Field contents are taken as submitted; only the
/// role has already been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub role: Role,
}

/// Authenticated identity persisted in the session cookie.
///
/// Carries just enough to authorize and greet the user. The password hash
/// never enters session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub user_id: UserId,
    pub role: Role,
    pub name: String,
}

impl From<&User> for SessionIdentity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
            name: user.name.clone(),
        }
    }
}

/// Gate decision for a protected route.
///
/// True iff an identity is present and its role equals `required` exactly.
/// There is no role hierarchy.
///
/// # Examples
/// ```
/// use jobboard::domain::{authorize, Role, SessionIdentity, UserId};
///
/// let identity = SessionIdentity { user_id: UserId::new(1), role: Role::Admin, name: "Root".into() };
/// assert!(authorize(Some(&identity), Role::Admin));
/// assert!(!authorize(Some(&identity), Role::Employer));
/// assert!(!authorize(None, Role::Admin));
/// ```
pub fn authorize(identity: Option<&SessionIdentity>, required: Role) -> bool {
    identity.is_some_and(|identity| identity.role == required)
}
