//! Domain primitives, services and ports.
//!
//! Purpose: Define strongly typed job-board entities and the use-case
//! services that operate on them. Keep types transport agnostic; inbound
//! adapters depend on the driving ports in [`ports`], outbound adapters
//! implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Role, User, Job, Application: stored entities and identifiers.
//! - SessionIdentity and [`authorize`]: the session authorization gate.
//! - StatsWindows / StatsReport: dashboard window arithmetic and payload.
//! - Services implementing the driving ports.

pub mod account_service;
pub mod application;
pub mod application_service;
pub mod auth;
pub mod error;
pub mod identity_service;
pub mod job;
pub mod job_service;
pub mod password;
pub mod ports;
mod repository_errors;
pub mod role;
pub mod stats;
pub mod stats_service;
#[cfg(test)]
pub(crate) mod test_fixtures;
pub mod user;

pub use self::account_service::AccountService;
pub use self::application::{
    Applicant, Application, ApplicationId, AppliedJob, JobApplicants, NewApplicationRecord,
};
pub use self::application_service::{ALREADY_APPLIED_MESSAGE, ApplicationService};
pub use self::auth::{
    LoginCredentials, Registration, SessionIdentity, authorize,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identity_service::{EMAIL_TAKEN_MESSAGE, IdentityService};
pub use self::job::{Job, JobDraft, JobId, JobListing, NewJobRecord};
pub use self::job_service::JobService;
pub use self::password::PasswordHash;
pub use self::role::{Role, UnknownRoleError};
pub use self::stats::{DateWindow, EntityCounts, StatsEntity, StatsReport, StatsWindows};
pub use self::stats_service::StatsService;
pub use self::user::{NewUserRecord, StoredCredentials, User, UserChanges, UserId};
