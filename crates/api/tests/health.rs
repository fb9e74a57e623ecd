//! Tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, body_text, get, memory_app};
use contacts_db::store::MemoryContactStore;

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (app, _) = memory_app();
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _) = memory_app();
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _) = memory_app();
    let response = get(&app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn static_files_are_served_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    let css = "body { color: #222; }\n";
    std::fs::write(dir.path().join("css/master.css"), css).unwrap();

    let mut config = common::test_config();
    config.static_dir = dir.path().to_path_buf();
    let app = common::build_test_app_with(Arc::new(MemoryContactStore::new()), config);

    let response = get(&app, "/css/master.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, css);
}
