//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::sync::Once;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use orgchart::api::{AppState, build_router};
use orgchart::config::{AppConfig, MEMORY_DATABASE};
use orgchart::db;
use serde_json::Value;
use tower::ServiceExt;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary.
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Config pointing at a private in-memory database.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.path = MEMORY_DATABASE.to_string();
    config
}

/// Router over a fresh, migrated in-memory database.
pub async fn test_app() -> Router {
    test_app_with(test_config()).await
}

pub async fn test_app_with(config: AppConfig) -> Router {
    init_test_env();

    let conn = db::connect(
        &config.database.connection_string(),
        config.database.effective_max_connections(),
    )
    .await
    .expect("Failed to connect to test database");
    db::migrate(&conn).await.expect("Failed to migrate test database");

    build_router(AppState::new(conn, config))
}

/// Send a request and decode the JSON body (`Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Create a team and return its id.
pub async fn create_team(app: &Router, name: &str) -> i64 {
    let (status, body) = post(app, "/api/v1/teams", serde_json::json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

/// Create an employee and return its id.
pub async fn create_employee(app: &Router, body: Value) -> i64 {
    let (status, body) = post(app, "/api/v1/employees", body).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}
