//! Job applications and the read models built from them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::job::{Job, JobId};
use super::user::UserId;

/// Store-assigned application identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(i64);

impl ApplicationId {
    /// Wrap a raw store identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier for persistence adapters.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A jobseeker's application to a job. Never updated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub jobseeker_id: UserId,
    pub applied_at: DateTime<Utc>,
}

/// Row to insert when a jobseeker applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplicationRecord {
    pub job_id: JobId,
    pub jobseeker_id: UserId,
    pub applied_at: DateTime<Utc>,
}

/// Applicant row shown to the employer who owns the job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub application_id: ApplicationId,
    pub jobseeker_id: UserId,
    pub name: String,
    pub email: String,
    pub applied_at: DateTime<Utc>,
}

/// Applications for a single job together with the job itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicants {
    pub job: Job,
    pub applicants: Vec<Applicant>,
}

/// One entry on a jobseeker's "applied" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedJob {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub title: String,
    pub applied_at: DateTime<Utc>,
}
