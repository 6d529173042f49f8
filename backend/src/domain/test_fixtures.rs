//! Shared fixtures for domain service tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{Job, JobId, Role, User, UserId};

/// Wednesday 15 May 2024, 09:30 UTC.
pub(crate) fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn clock_at(utc_now: DateTime<Utc>) -> Arc<dyn Clock> {
    Arc::new(FixtureClock { utc_now })
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    clock_at(fixture_timestamp())
}

pub(crate) fn make_user(id: i64, role: Role) -> User {
    User {
        id: UserId::new(id),
        name: format!("{} {id}", role.label()),
        email: format!("{role}{id}@example.com"),
        role,
        created_at: fixture_timestamp(),
    }
}

pub(crate) fn make_job(id: i64, employer: i64) -> Job {
    Job {
        id: JobId::new(id),
        title: format!("Job {id}"),
        description: "Build things".to_owned(),
        employer_id: UserId::new(employer),
        created_at: fixture_timestamp(),
    }
}
