//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p medialib-api`. The router is backed by the
//! in-memory media collection, so no database is needed.

pub mod fixtures;

use axum_test::TestServer;
use medialib_api::setup::routes;
use medialib_api::state::AppState;
use medialib_core::Config;
use medialib_db::{ConnectionState, InMemoryMediaCollection, StorageConnector};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server, backing collection, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub collection: InMemoryMediaCollection,
    pub static_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Config pointing at a throwaway static dir, with optional overrides.
pub fn test_config(static_dir: &TempDir, overrides: &[(&str, &str)]) -> Config {
    let static_dir = static_dir.path().to_string_lossy().to_string();
    Config::from_lookup(|key| {
        if let Some((_, value)) = overrides.iter().find(|(k, _)| *k == key) {
            return Some(value.to_string());
        }
        match key {
            "STATIC_DIR" => Some(static_dir.clone()),
            _ => None,
        }
    })
    .expect("test config")
}

fn static_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("index.html"), fixtures::INDEX_HTML).expect("index.html");
    dir
}

fn build_server(config: &Config, store: StorageConnector) -> TestServer {
    let state = Arc::new(AppState::new(store));
    let router = routes::build_router(config, state).expect("router");
    TestServer::new(router).expect("test server")
}

/// Setup test app with a connected in-memory collection.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_env(&[])
}

/// Same as [`setup_test_app`] with extra configuration values.
pub fn setup_test_app_with_env(overrides: &[(&str, &str)]) -> TestApp {
    let static_dir = static_dir();
    let config = test_config(&static_dir, overrides);
    let collection = InMemoryMediaCollection::new();
    let server = build_server(&config, StorageConnector::ready(Arc::new(collection.clone())));

    TestApp {
        server,
        collection,
        static_dir,
    }
}

/// Setup test app whose storage connector is stuck in the given state.
pub fn setup_test_app_in_state(state: ConnectionState) -> TestServer {
    let static_dir = static_dir();
    let config = test_config(&static_dir, &[]);
    build_server(&config, StorageConnector::with_state(state))
}
