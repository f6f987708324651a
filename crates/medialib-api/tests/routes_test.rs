//! Health probe, static fallback and middleware tests.

mod helpers;

use axum::http::StatusCode;
use helpers::fixtures::INDEX_HTML;
use helpers::{setup_test_app, setup_test_app_in_state, setup_test_app_with_env};
use medialib_db::ConnectionState;
use serde_json::Value;

#[tokio::test]
async fn test_liveness() {
    let app = setup_test_app();

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_when_connected() {
    let app = setup_test_app();

    let response = app.client().get("/ready").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["storage"], "ready");
}

#[tokio::test]
async fn test_readiness_while_connecting() {
    let server = setup_test_app_in_state(ConnectionState::Connecting);

    let response = server.get("/ready").expect_failure().await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["storage"], "connecting");
}

#[tokio::test]
async fn test_readiness_when_store_is_failing() {
    let app = setup_test_app();
    app.collection.set_failing(true);

    let response = app.client().get("/ready").expect_failure().await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["storage"], "unhealthy");
}

#[tokio::test]
async fn test_unknown_path_serves_frontend() {
    let app = setup_test_app();

    let response = app.client().get("/library/some/client/route").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_static_asset_is_served() {
    let app = setup_test_app();
    std::fs::write(app.static_dir.path().join("app.js"), "console.log(1);").unwrap();

    let response = app.client().get("/app.js").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "console.log(1);");
}

#[tokio::test]
async fn test_missing_static_dir_still_serves_api() {
    let app = setup_test_app_with_env(&[("STATIC_DIR", "/nonexistent/medialib/client/build")]);

    let response = app.client().get("/library").expect_failure().await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app.client().get("/media").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/health")
        .add_header("X-Request-ID", "req-123")
        .await;
    assert_eq!(response.header("X-Request-ID"), "req-123");

    let response = app.client().get("/health").await;
    assert!(!response.header("X-Request-ID").is_empty());
}
