//! Job board backend library modules.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::Trace;
pub use middleware::trace::TraceId;
