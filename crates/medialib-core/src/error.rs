//! Error types module
//!
//! All failures of the upload and listing pipeline are unified under the `AppError`
//! enum. Each variant describes its own HTTP presentation through `ErrorMetadata`,
//! so the API layer only has to wrap and render it.
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the `sqlx` feature.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Message returned to clients when an upload lacks one of its two files.
pub const MISSING_PART_MESSAGE: &str = "Both image and song files are required.";

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for client mistakes worth noticing
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MISSING_PART")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or both of the required file parts is absent from an upload.
    #[error("Missing upload part: {0}")]
    MissingPart(String),

    /// The multipart body could not be decoded.
    #[error("Malformed multipart body: {0}")]
    Decode(String),

    /// The request body exceeded the configured upload cap.
    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    /// The media collection is not connected (still connecting, or the connection failed).
    #[error("Media store unavailable: {0}")]
    StorageUnavailable(String),

    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, LogLevel) {
    match err {
        AppError::MissingPart(_) => (400, "MISSING_PART", false, LogLevel::Warn),
        AppError::Decode(_) => (400, "DECODE_ERROR", false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, LogLevel::Debug),
        AppError::StorageUnavailable(_) => (500, "STORAGE_UNAVAILABLE", true, LogLevel::Error),
        AppError::Database(_) => (500, "DATABASE_ERROR", true, LogLevel::Error),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => {
            (500, "INTERNAL_ERROR", true, LogLevel::Error)
        }
    }
}

impl AppError {
    /// Get the error type name for logs
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingPart(_) => "MissingPart",
            AppError::Decode(_) => "Decode",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::StorageUnavailable(_) => "StorageUnavailable",
            AppError::Database(_) => "Database",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingPart(_) => MISSING_PART_MESSAGE.to_string(),
            AppError::Decode(ref msg) => format!("Malformed upload: {}", msg),
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::StorageUnavailable(_) => "Media store is not available".to_string(),
            AppError::Database(_) => "Failed to access media store".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_missing_part() {
        let err = AppError::MissingPart("song".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "MISSING_PART");
        assert_eq!(err.client_message(), MISSING_PART_MESSAGE);
        assert!(!err.is_sensitive());
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_error_metadata_storage_unavailable() {
        let err = AppError::StorageUnavailable("still connecting".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "STORAGE_UNAVAILABLE");
        assert!(err.is_sensitive());
        assert!(!err.client_message().contains("still connecting"));
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_error_metadata_database() {
        #[cfg(feature = "sqlx")]
        let err = AppError::from(sqlx::Error::PoolClosed);
        #[cfg(not(feature = "sqlx"))]
        let err = AppError::Database("pool closed".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert_eq!(err.client_message(), "Failed to access media store");
    }

    #[test]
    fn test_decode_error_is_client_error() {
        let err = AppError::Decode("unexpected field 'cover'".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert!(err.client_message().contains("cover"));
    }

    #[test]
    fn test_detailed_message_includes_source_chain() {
        let err = AppError::from(anyhow::anyhow!("pool timed out").context("insert failed"));
        let details = err.detailed_message();
        assert!(details.contains("Internal error with source"));
        assert!(details.contains("insert failed"));
    }
}
