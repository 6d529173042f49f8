//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod accounts_command;
mod accounts_query;
mod application_repository;
mod applications_command;
mod applications_query;
mod job_repository;
mod jobs_command;
mod jobs_query;
mod login_service;
mod stats_query;
mod stats_repository;
mod user_repository;

#[cfg(test)]
pub use accounts_command::MockAccountsCommand;
pub use accounts_command::{AccountUpdate, AccountsCommand};
#[cfg(test)]
pub use accounts_query::MockAccountsQuery;
pub use accounts_query::AccountsQuery;
#[cfg(test)]
pub use application_repository::MockApplicationRepository;
pub use application_repository::{ApplicationRepository, ApplicationRepositoryError};
#[cfg(test)]
pub use applications_command::MockApplicationsCommand;
pub use applications_command::ApplicationsCommand;
#[cfg(test)]
pub use applications_query::MockApplicationsQuery;
pub use applications_query::ApplicationsQuery;
#[cfg(test)]
pub use job_repository::MockJobRepository;
pub use job_repository::{JobRepository, JobRepositoryError};
#[cfg(test)]
pub use jobs_command::MockJobsCommand;
pub use jobs_command::JobsCommand;
#[cfg(test)]
pub use jobs_query::MockJobsQuery;
pub use jobs_query::JobsQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use stats_query::MockStatsQuery;
pub use stats_query::StatsQuery;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
pub use stats_repository::{StatsRepository, StatsRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
