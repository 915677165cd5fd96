mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{get, mock_app, post_json, send};
use serde_json::json;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let (app, _store) = mock_app();

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "clinic-service");

    let (status, _) = send(&app, get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn metrics_endpoint_returns_text() {
    let (app, _store) = mock_app();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn request_id_is_echoed() {
    let (app, _store) = mock_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn responses_are_compressed_when_accepted() {
    let (app, _store) = mock_app();
    send(
        &app,
        post_json(
            "/store",
            &json!({ "name": "A long enough name", "email": "someone@example.com" }),
        ),
    )
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/get-data")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
}
