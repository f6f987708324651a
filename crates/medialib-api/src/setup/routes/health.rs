//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use medialib_db::ConnectionState;
use std::sync::Arc;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - the media store is connected and answering.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = match state.store.state() {
        ConnectionState::Ready(collection) => {
            match tokio::time::timeout(TIMEOUT, collection.ping()).await {
                Ok(Ok(())) => "ready".to_string(),
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "Media store readiness check failed");
                    "unhealthy".to_string()
                }
                Err(_) => {
                    tracing::error!("Media store readiness check timed out");
                    "timeout".to_string()
                }
            }
        }
        other => other.as_str().to_string(),
    };

    let status_code = if store == "ready" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status = if status_code == StatusCode::OK {
        "ready"
    } else {
        "not_ready"
    };

    (
        status_code,
        Json(serde_json::json!({ "status": status, "storage": store })),
    )
}
