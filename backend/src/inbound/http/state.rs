//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountsCommand, AccountsQuery, ApplicationsCommand, ApplicationsQuery, JobsCommand,
    JobsQuery, LoginService, StatsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub accounts: Arc<dyn AccountsQuery>,
    pub accounts_command: Arc<dyn AccountsCommand>,
    pub jobs: Arc<dyn JobsQuery>,
    pub jobs_command: Arc<dyn JobsCommand>,
    pub applications: Arc<dyn ApplicationsQuery>,
    pub applications_command: Arc<dyn ApplicationsCommand>,
    pub stats: Arc<dyn StatsQuery>,
}
