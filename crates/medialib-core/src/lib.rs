//! Medialib Core Library
//!
//! Domain models, the media document builder, error types and configuration
//! shared by the storage and API crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel, MISSING_PART_MESSAGE};
