#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use clinic_service::services::{MockStore, UnavailableStore};
use clinic_service::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

/// Router backed by an empty in-memory store.
pub fn mock_app() -> (Router, Arc<MockStore>) {
    let store = Arc::new(MockStore::new());
    let app = build_router(AppState::new(store.clone()));
    (app, store)
}

/// Router whose store never connected.
pub fn unavailable_app() -> Router {
    build_router(AppState::new(Arc::new(UnavailableStore::new(
        "connection refused",
    ))))
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send one request and return the status with the parsed JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
