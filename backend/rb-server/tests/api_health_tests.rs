//! Integration tests for the health endpoints
mod common;

use crate::common::{create_test_app_state, send};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn given_running_server_when_get_health_then_healthy() {
    let server = MockServer::start().await;
    let state = create_test_app_state(&server);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(&state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "ok": true, "message": "Healthy" }));
}

#[tokio::test]
async fn given_running_server_when_get_root_then_healthy() {
    let server = MockServer::start().await;
    let state = create_test_app_state(&server);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(&state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
}
