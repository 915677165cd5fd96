mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{get, mock_app, post_json, send};
use serde_json::{json, Value};

#[tokio::test]
async fn store_then_list_returns_the_user() {
    let (app, _store) = mock_app();

    let (status, body) = send(
        &app,
        post_json("/store", &json!({ "name": "A", "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Data stored successfully");
    assert_eq!(body["data"]["acknowledged"], true);
    let inserted_id = body["data"]["insertedId"].as_str().unwrap().to_string();

    let (status, body) = send(&app, get("/get-data")).await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(
        users[0],
        json!({ "_id": inserted_id, "name": "A", "email": "a@x.com" })
    );
}

#[tokio::test]
async fn empty_collection_is_not_found() {
    let (app, _store) = mock_app();

    let (status, body) = send(&app, get("/get-data")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.is_array());
    assert_eq!(body["error"], "No data found");
}

#[tokio::test]
async fn missing_fields_stay_absent_and_extra_fields_are_dropped() {
    let (app, store) = mock_app();

    let (status, _) = send(
        &app,
        post_json("/store", &json!({ "name": "B", "isAdmin": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let stored = store.users.lock().unwrap().clone();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, Some(json!("B")));
    assert_eq!(stored[0].email, None);

    let (_, body) = send(&app, get("/get-data")).await;
    let user = body[0].as_object().unwrap();
    assert!(user.contains_key("_id"));
    assert!(!user.contains_key("email"));
    assert!(!user.contains_key("isAdmin"));
}

#[tokio::test]
async fn explicit_null_field_is_kept() {
    let (app, store) = mock_app();

    let (status, _) = send(
        &app,
        post_json("/store", &json!({ "name": null, "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.users.lock().unwrap()[0].name, Some(Value::Null));

    let (_, body) = send(&app, get("/get-data")).await;
    let user = body[0].as_object().unwrap();
    assert_eq!(user.get("name"), Some(&Value::Null));
    assert_eq!(user.get("email"), Some(&json!("a@x.com")));
}

#[tokio::test]
async fn field_values_are_stored_verbatim() {
    let (app, _store) = mock_app();

    send(
        &app,
        post_json("/store", &json!({ "name": ["A", "B"], "email": 42 })),
    )
    .await;

    let (_, body) = send(&app, get("/get-data")).await;
    assert_eq!(body[0]["name"], json!(["A", "B"]));
    assert_eq!(body[0]["email"], json!(42));
}

#[tokio::test]
async fn non_object_body_is_a_validation_error() {
    let (app, store) = mock_app();

    let (status, body) = send(&app, post_json("/store", &json!(["A", "a@x.com"]))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation error");
    assert!(store.users.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let (app, _store) = mock_app();

    let request = Request::builder()
        .method("POST")
        .uri("/store")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn body_without_content_type_is_accepted() {
    let (app, store) = mock_app();

    let request = Request::builder()
        .method("POST")
        .uri("/store")
        .body(Body::from(r#"{"name":"C","email":"c@x.com"}"#))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Data stored successfully");
    assert_eq!(store.users.lock().unwrap()[0].name, Some(json!("C")));
}

#[tokio::test]
async fn empty_body_stores_an_empty_record() {
    let (app, store) = mock_app();

    let request = Request::builder()
        .method("POST")
        .uri("/store")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.users.lock().unwrap()[0].name, None);
}
