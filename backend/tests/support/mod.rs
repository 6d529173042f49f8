//! Shared helpers for backend integration tests.
//!
//! Each test gets its own SQLite file inside a temporary directory, migrated
//! and pooled exactly as the server does at start-up.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use jobboard::domain::{NewUserRecord, PasswordHash, Role};
use jobboard::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use tempfile::TempDir;

/// A migrated, pooled database that lives as long as the value.
pub struct TestDatabase {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDatabase {
    /// Create and migrate a fresh database file.
    pub async fn provision() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let url = dir.path().join("jobboard.db").to_string_lossy().into_owned();
        run_migrations(&url).await.expect("migrations apply");
        let pool = DbPool::new(
            PoolConfig::new(url)
                .with_max_size(2)
                .with_connection_timeout(Duration::from_secs(5)),
        )
        .await
        .expect("pool builds");
        Self { pool, _dir: dir }
    }
}

/// Timestamp on the given UTC date at 09:30.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// A user record with a pre-computed hash placeholder; repository tests never
/// verify passwords.
pub fn user_record(name: &str, role: Role, created_at: DateTime<Utc>) -> NewUserRecord {
    NewUserRecord {
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        password_hash: PasswordHash::from_stored("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"),
        role,
        created_at,
    }
}
