//! Shared test harness for API integration tests.
//!
//! Builds the full application router (same middleware stack as
//! production) against a `#[sqlx::test]`-provisioned pool and provides
//! request helpers that attach a valid bearer token.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use museboard_cloud::StorageProvider;
use sqlx::PgPool;
use tower::ServiceExt;

use museboard_api::auth::jwt::{create_token, JwtConfig};
use museboard_api::config::ServerConfig;
use museboard_api::router::build_app_router;
use museboard_api::state::AppState;

/// User id embedded in the test bearer token.
pub const TEST_USER_ID: i64 = 1;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_secs: 3600,
        },
        storage: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Storage is disabled.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: None,
    };
    build_app_router(state, &config)
}

/// Like [`build_test_app`] but with a storage provider plugged in, so the
/// upload endpoints are live.
pub fn build_test_app_with_storage(pool: PgPool, storage: Arc<dyn StorageProvider>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Some(storage),
    };
    build_app_router(state, &config)
}

/// Bearer token for [`TEST_USER_ID`], signed with the test secret.
pub fn auth_token() -> String {
    create_token(TEST_USER_ID, &test_config().jwt).expect("token generation should succeed")
}

async fn send(app: Router, method: Method, path: &str, body: Option<serde_json::Value>) -> Response {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("authorization", format!("Bearer {}", auth_token()));

    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).expect("request should build"))
        .await
        .expect("request should not fail at the transport level")
}

/// Send an authenticated GET request.
pub async fn get(app: Router, path: &str) -> Response {
    send(app, Method::GET, path, None).await
}

/// Send an authenticated POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, path, Some(json)).await
}

/// Send an authenticated POST request with no body.
pub async fn post(app: Router, path: &str) -> Response {
    send(app, Method::POST, path, None).await
}

/// Send an authenticated PUT request with a JSON body.
pub async fn put_json(app: Router, path: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, path, Some(json)).await
}

/// Send an authenticated DELETE request.
pub async fn delete(app: Router, path: &str) -> Response {
    send(app, Method::DELETE, path, None).await
}

/// Send a GET request with no Authorization header.
pub async fn get_unauthed(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request)
        .await
        .expect("request should not fail at the transport level")
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
