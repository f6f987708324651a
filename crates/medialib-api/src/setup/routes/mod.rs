//! Route configuration and setup.
//!
//! The two API routes and the health probes are matched first; every other path
//! falls through to the static frontend bundle.

mod health;

use crate::handlers::{media_list::list_media, upload::upload_media};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use medialib_core::Config;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn build_router(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let static_dir = Path::new(config.static_dir());
    if !static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir(),
            "Static asset directory not found; frontend routes will return 404"
        );
    }
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let mut app = Router::new()
        .route("/upload", post(upload_media))
        .route("/media", get(list_media))
        .route("/health", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .fallback_service(static_files)
        // Whole files are buffered; uploads are unbounded unless a cap is configured.
        .layer(DefaultBodyLimit::disable());

    if let Some(limit) = config.max_upload_size_bytes() {
        tracing::info!(max_upload_bytes = limit, "Request body limit enabled");
        app = app.layer(RequestBodyLimitLayer::new(limit));
    }

    let app = app
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(
            medialib_infra::request_id_middleware,
        ))
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
