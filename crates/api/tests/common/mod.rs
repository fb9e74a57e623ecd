#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use contacts_api::app::{build_app, App};
use contacts_api::config::ServerConfig;
use contacts_api::state::AppState;
use contacts_db::models::contact::ReturnDocument;
use contacts_db::store::{ContactStore, MemoryContactStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://localhost/contacts_test".to_string(),
        static_dir: PathBuf::from("does-not-exist"),
        request_timeout_secs: 30,
        update_returns: ReturnDocument::Before,
    }
}

/// Build the full application around the given store and config.
///
/// This is the same assembly `main.rs` uses, so tests exercise the real
/// middleware stack and method override.
pub fn build_test_app_with(store: Arc<dyn ContactStore>, config: ServerConfig) -> App {
    build_app(AppState {
        store,
        config: Arc::new(config),
    })
}

pub fn build_test_app(store: Arc<dyn ContactStore>) -> App {
    build_test_app_with(store, test_config())
}

/// An app backed by a fresh in-memory store, plus a handle on that store.
pub fn memory_app() -> (App, Arc<MemoryContactStore>) {
    let store = Arc::new(MemoryContactStore::new());
    (build_test_app(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &App, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &App, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn form(app: &App, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: &App, uri: &str, body: &str) -> Response {
    form(app, Method::POST, uri, body).await
}

pub async fn put_form(app: &App, uri: &str, body: &str) -> Response {
    form(app, Method::PUT, uri, body).await
}

pub async fn json(app: &App, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &App, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
}
