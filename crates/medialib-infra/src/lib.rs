//! Medialib Infrastructure Library
//!
//! Shared infrastructure used by the API binary:
//! - Telemetry initialization (tracing subscriber)
//! - Middleware (request ID)

#[cfg(feature = "middleware")]
pub mod middleware;

#[cfg(feature = "observability-basic")]
pub mod telemetry;

#[cfg(feature = "middleware")]
pub use middleware::{request_id_middleware, RequestId};

#[cfg(feature = "observability-basic")]
pub use telemetry::{init_telemetry, shutdown_telemetry};
