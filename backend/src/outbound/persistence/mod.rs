//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports, backed by a single
//! SQLite file through `diesel-async`'s `SyncConnectionWrapper` and a `bb8`
//! pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Typed errors**: Diesel and pool failures map onto each port's error
//!   enum.
//!
//! # Example
//!
//! ```ignore
//! use jobboard::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("jobboard.db").await?;
//! let pool = DbPool::new(PoolConfig::new("jobboard.db")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_application_repository;
mod diesel_error_mapping;
mod diesel_job_repository;
mod diesel_stats_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_application_repository::DieselApplicationRepository;
pub use diesel_job_repository::DieselJobRepository;
pub use diesel_stats_repository::DieselStatsRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
