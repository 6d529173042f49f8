//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match `migrations/` exactly. There are no foreign
//! keys: jobs and applications outlive the rows they reference, so the
//! tables are only joined with explicit `ON` clauses.

diesel::table! {
    /// Accounts of every role.
    users (id) {
        id -> BigInt,
        name -> Text,
        /// Unique across all roles.
        email -> Text,
        /// Argon2id PHC string.
        password_hash -> Text,
        /// `admin`, `employer` or `jobseeker`.
        role -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    /// Job postings.
    jobs (id) {
        id -> BigInt,
        title -> Text,
        description -> Text,
        employer_id -> BigInt,
        created_at -> Timestamp,
    }
}

diesel::table! {
    /// Applications; unique per `(job_id, jobseeker_id)`.
    applications (id) {
        id -> BigInt,
        job_id -> BigInt,
        jobseeker_id -> BigInt,
        applied_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, jobs, applications);
