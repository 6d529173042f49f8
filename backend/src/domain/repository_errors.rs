//! Mapping from driven-port errors to domain errors.
//!
//! Connection failures surface as `ServiceUnavailable`, query failures as
//! `InternalError`. Variants carrying business meaning (duplicate email,
//! duplicate application) are handled by the calling service before these
//! functions see them, so reaching them here is itself an internal error.

use crate::domain::Error;
use crate::domain::ports::{
    ApplicationRepositoryError, JobRepositoryError, StatsRepositoryError, UserRepositoryError,
};

pub(crate) fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserRepositoryError::EmailTaken { email } => {
            Error::internal(format!("unexpected email conflict for {email}"))
        }
    }
}

pub(crate) fn map_job_error(error: JobRepositoryError) -> Error {
    match error {
        JobRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("job repository unavailable: {message}"))
        }
        JobRepositoryError::Query { message } => {
            Error::internal(format!("job repository error: {message}"))
        }
    }
}

pub(crate) fn map_application_error(error: ApplicationRepositoryError) -> Error {
    match error {
        ApplicationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("application repository unavailable: {message}"))
        }
        ApplicationRepositoryError::Query { message } => {
            Error::internal(format!("application repository error: {message}"))
        }
        ApplicationRepositoryError::Duplicate => {
            Error::internal("unexpected duplicate application")
        }
    }
}

pub(crate) fn map_stats_error(error: StatsRepositoryError) -> Error {
    match error {
        StatsRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("stats repository unavailable: {message}"))
        }
        StatsRepositoryError::Query { message } => {
            Error::internal(format!("stats repository error: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(map_user_error(UserRepositoryError::connection("down")), ErrorCode::ServiceUnavailable)]
    #[case(map_user_error(UserRepositoryError::query("bad sql")), ErrorCode::InternalError)]
    #[case(map_job_error(JobRepositoryError::connection("down")), ErrorCode::ServiceUnavailable)]
    #[case(map_job_error(JobRepositoryError::query("bad sql")), ErrorCode::InternalError)]
    #[case(
        map_application_error(ApplicationRepositoryError::connection("down")),
        ErrorCode::ServiceUnavailable
    )]
    #[case(
        map_application_error(ApplicationRepositoryError::duplicate()),
        ErrorCode::InternalError
    )]
    #[case(map_stats_error(StatsRepositoryError::query("bad sql")), ErrorCode::InternalError)]
    fn maps_to_expected_codes(#[case] error: Error, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }
}
