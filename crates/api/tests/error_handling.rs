//! Error body shape for malformed requests.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use common::{body_json, fresh_uid, TestApp};

async fn post_raw(
    app: &TestApp,
    uri: &str,
    token: &str,
    content_type: &str,
    body: &'static str,
) -> axum::response::Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    app.send(request).await
}

#[tokio::test]
async fn malformed_json_is_400_with_json_body() {
    let app = TestApp::new();
    let token = app.register(&fresh_uid("frodo")).await;

    let response = post_raw(
        &app,
        "/api/dictionaries",
        &token,
        "application/json",
        "{ not json",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_content_type_is_400() {
    let app = TestApp::new();
    let token = app.register(&fresh_uid("frodo")).await;

    let response = post_raw(&app, "/api/dictionaries", &token, "text/plain", "{}").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn wrongly_typed_field_is_400() {
    let app = TestApp::new();
    let token = app.register(&fresh_uid("frodo")).await;
    let id = app.create_dictionary(&token, "Heroes").await;

    let response = post_raw(
        &app,
        &format!("/api/characters/{id}"),
        &token,
        "application/json",
        r#"{ "name": "Frodo", "age": "fifty" }"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn authentication_is_checked_before_the_body() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/dictionaries")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
