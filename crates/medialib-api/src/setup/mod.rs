//! Application setup and initialization

pub mod routes;
pub mod server;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use medialib_core::Config;
use medialib_db::StorageConnector;
use std::sync::Arc;

/// Initialize the application: telemetry, storage connector, routes.
///
/// The storage connection is started in the background and is not awaited.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    validation::validate_config(&config).context("Configuration validation failed")?;

    medialib_infra::init_telemetry(config.environment())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    let store = StorageConnector::spawn(&config);
    let state = Arc::new(AppState::new(store));

    let router = routes::build_router(&config, state.clone())?;

    Ok((state, router))
}
