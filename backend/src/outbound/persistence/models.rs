//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live in the
//! repositories that load them.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{applications, jobs, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub created_at: NaiveDateTime,
}

/// Changeset for account edits. A `None` hash leaves the column untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Job models
// ---------------------------------------------------------------------------

/// Row struct for reading from the jobs table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct JobRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub employer_id: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = jobs)]
pub(crate) struct NewJobRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub employer_id: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = jobs)]
pub(crate) struct JobUpdate<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

// ---------------------------------------------------------------------------
// Application models
// ---------------------------------------------------------------------------

/// Row struct for reading from the applications table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ApplicationRow {
    pub id: i64,
    pub job_id: i64,
    pub jobseeker_id: i64,
    pub applied_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = applications)]
pub(crate) struct NewApplicationRow {
    pub job_id: i64,
    pub jobseeker_id: i64,
    pub applied_at: NaiveDateTime,
}
