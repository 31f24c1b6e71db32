#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use epicdict_api::auth::jwt::SharedSecretVerifier;
use epicdict_api::config::{AuthConfig, ServerConfig, StoreBackend};
use epicdict_api::router::build_app_router;
use epicdict_api::state::AppState;
use epicdict_db::store::MemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret-long-enough-for-hmac";
pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        auth: AuthConfig::SharedSecret {
            secret: TEST_SECRET.to_string(),
        },
    }
}

/// The full application router over an in-memory store.
///
/// `store` is kept so tests can change plans directly, the way billing would.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub verifier: SharedSecretVerifier,
}

impl TestApp {
    pub fn new() -> Self {
        let config = test_config();
        let store = Arc::new(MemoryStore::new());
        let verifier = SharedSecretVerifier::new(TEST_SECRET);

        let state = AppState {
            store: store.clone(),
            verifier: Arc::new(verifier.clone()),
            config: Arc::new(config.clone()),
        };

        Self {
            router: build_app_router(state, &config),
            store,
            verifier,
        }
    }

    pub fn token_for(&self, uid: &str) -> String {
        self.verifier
            .issue_token(uid, Some(&format!("{uid}@example.com")))
            .expect("token issuance should succeed")
    }

    /// Register `uid` through the API and return a token for it.
    pub async fn register(&self, uid: &str) -> String {
        let body = json!({
            "uid": uid,
            "email": format!("{uid}@example.com"),
            "displayName": uid,
        });
        let response = self.post_json("/api/auth/register", None, body).await;
        assert_eq!(response.status(), 200, "registration should succeed");
        self.token_for(uid)
    }

    /// Create a dictionary and return its id.
    pub async fn create_dictionary(&self, token: &str, title: &str) -> i64 {
        let body = json!({ "title": title, "genre": "Fantasy", "description": "", "tags": [] });
        let response = self.post_json("/api/dictionaries", Some(token), body).await;
        assert_eq!(response.status(), 201, "dictionary creation should succeed");
        body_json(response).await["id"]
            .as_i64()
            .expect("id should be an integer")
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(build(Method::GET, uri, token, None)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(build(Method::DELETE, uri, token, None)).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response {
        self.send(build(Method::POST, uri, token, Some(body))).await
    }
}

pub fn build(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

/// A unique uid so tests never share users.
pub fn fresh_uid(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
