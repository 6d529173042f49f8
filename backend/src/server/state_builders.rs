//! Wires Diesel repositories into the domain services behind `HttpState`.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::{
    AccountService, ApplicationService, IdentityService, JobService, StatsService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DbPool, DieselApplicationRepository, DieselJobRepository, DieselStatsRepository,
    DieselUserRepository,
};

/// Build the handler state over a shared pool.
///
/// Services that implement both halves of a command/query pair are shared
/// between the two fields.
pub fn build_http_state(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let jobs = Arc::new(DieselJobRepository::new(pool.clone()));
    let applications = Arc::new(DieselApplicationRepository::new(pool.clone()));
    let stats = Arc::new(DieselStatsRepository::new(pool.clone()));

    let accounts = Arc::new(AccountService::new(users.clone()));
    let job_service = Arc::new(JobService::new(jobs.clone(), clock.clone()));
    let application_service = Arc::new(ApplicationService::new(
        applications,
        jobs,
        clock.clone(),
    ));

    HttpState {
        login: Arc::new(IdentityService::new(users, clock.clone())),
        accounts: accounts.clone(),
        accounts_command: accounts,
        jobs: job_service.clone(),
        jobs_command: job_service,
        applications: application_service.clone(),
        applications_command: application_service,
        stats: Arc::new(StatsService::new(stats, clock)),
    }
}
