//! HTTP inbound adapter: page handlers, session plumbing and the route
//! table.

pub mod admin;
pub mod auth;
pub mod employer;
pub mod error;
pub mod flash;
pub mod jobseeker;
pub mod routes;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;
