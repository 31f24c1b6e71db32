//! HTTP-level integration tests for registration and bearer authentication.

mod common;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, fresh_uid, TestApp};
use epicdict_api::auth::jwt::{Claims, SharedSecretVerifier};
use epicdict_core::plans::Plan;
use serde_json::json;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_returns_message() {
    let app = TestApp::new();
    let body = json!({ "uid": "frodo", "email": "frodo@shire.test", "displayName": "Frodo" });

    let response = app.post_json("/api/auth/register", None, body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "User registered" }));
}

#[tokio::test]
async fn register_without_uid_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/auth/register", None, json!({ "email": "x@example.com" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn register_with_blank_uid_is_rejected() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/auth/register", None, json!({ "uid": "" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "uid is required");
}

#[tokio::test]
async fn reregistering_keeps_the_plan() {
    let app = TestApp::new();
    let uid = fresh_uid("gandalf");
    let token = app.register(&uid).await;
    assert!(app.store.set_role(&uid, Plan::Ultra).await);

    app.register(&uid).await;

    let account = body_json(app.get("/api/account", Some(&token)).await).await;
    assert_eq!(account["role"], "ultra");
    assert_eq!(account["plan"]["maxCharacters"], 300);
}

// ---------------------------------------------------------------------------
// Bearer authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_header_is_401() {
    let app = TestApp::new();

    let response = app.get("/api/dictionaries", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Unauthorized", "code": "UNAUTHORIZED" })
    );
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/dictionaries")
        .header(AUTHORIZATION, "Basic Zm9vOmJhcg==")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bearer_without_token_is_401() {
    let app = TestApp::new();

    for header in ["Bearer ", "Bearer    "] {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/dictionaries")
            .header(AUTHORIZATION, header)
            .body(Body::empty())
            .unwrap();

        let response = app.send(request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "header {header:?}");
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Unauthorized", "code": "UNAUTHORIZED" })
        );
    }
}

#[tokio::test]
async fn garbage_token_is_403() {
    let app = TestApp::new();

    let response = app.get("/api/dictionaries", Some("not-a-token")).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Forbidden", "code": "FORBIDDEN" })
    );
}

#[tokio::test]
async fn expired_token_is_403() {
    let app = TestApp::new();
    let now = chrono::Utc::now().timestamp();
    let token = app
        .verifier
        .sign(&Claims {
            sub: "frodo".to_string(),
            email: None,
            exp: now - 300,
            iat: now - 600,
        })
        .unwrap();

    let response = app.get("/api/dictionaries", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn token_from_another_secret_is_403() {
    let app = TestApp::new();
    let token = SharedSecretVerifier::new("some-other-secret")
        .issue_token("frodo", None)
        .unwrap();

    let response = app.get("/api/dictionaries", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unregistered_caller_gets_the_free_plan() {
    let app = TestApp::new();
    let token = app.token_for(&fresh_uid("stranger"));

    let account = app.get("/api/account", Some(&token)).await;
    assert_eq!(account.status(), StatusCode::OK);
    let account = body_json(account).await;

    assert_eq!(account["role"], "free");
    assert_eq!(account["usage"], json!({ "used": 0, "total": 20 }));
}
