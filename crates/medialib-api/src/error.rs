//! HTTP error response conversion
//!
//! Handlers return `Result<impl IntoResponse, HttpAppError>`. Any `AppError` converts
//! with `?`, and the response is rendered from the error's own metadata: its status
//! code and a plain-text client message. The full error chain is only written to logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medialib_core::{AppError, ErrorMetadata, LogLevel};

/// Response header carrying the machine-readable error code.
pub const ERROR_CODE_HEADER: &str = "X-Error-Code";

/// Wrapper type for AppError to implement IntoResponse (orphan rule).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::from(err))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let details = error.detailed_message();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %details, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %details, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %details, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        (
            status,
            [(ERROR_CODE_HEADER, app_error.error_code())],
            app_error.client_message(),
        )
            .into_response()
    }
}
