//! Closed set of account roles.
//!
//! Every protected route names exactly one required role. Roles compare by
//! identity only: there is no hierarchy, so `Admin` never satisfies an
//! `Employer` requirement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role attached to every account at registration. Immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Moderates accounts and listings; sees the statistics dashboard.
    Admin,
    /// Posts jobs and reviews applicants for them.
    Employer,
    /// Browses jobs and applies.
    Jobseeker,
}

impl Role {
    /// All roles, in the order registration offers them.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Employer, Self::Jobseeker];

    /// Stored and wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employer => "employer",
            Self::Jobseeker => "jobseeker",
        }
    }

    /// Capitalised name for user-facing messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Employer => "Employer",
            Self::Jobseeker => "Jobseeker",
        }
    }

    /// Landing path for a freshly authenticated account (`/{role}`).
    pub fn home_path(self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name a role exactly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'; expected admin, employer or jobseeker")]
pub struct UnknownRoleError(pub String);

impl FromStr for Role {
    type Err = UnknownRoleError;

    /// Parse a role by exact, case-sensitive match.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| UnknownRoleError(value.to_owned()))
    }
}
