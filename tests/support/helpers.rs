// tests/support/helpers.rs
use super::mocks;
use articles_api::application::{ports::security::TokenVerifier, services::ApplicationServices};
use articles_api::domain::article::ArticleRepository;
use articles_api::infrastructure::{
    repositories::InMemoryArticleRepository, security::JwtTokenVerifier,
};
use articles_api::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_test_state(repo: Arc<dyn ArticleRepository>) -> HttpState {
    let verifier: Arc<dyn TokenVerifier> = Arc::new(JwtTokenVerifier::new(
        mocks::TEST_SECRET.as_bytes(),
        Some(mocks::TEST_ISSUER),
        Some(mocks::TEST_AUDIENCE),
    ));
    let services = Arc::new(ApplicationServices::new(repo, verifier));
    HttpState { services }
}

pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(InMemoryArticleRepository::new()))
}

pub fn make_test_router_with_repo(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    build_router(build_test_state(repo), &RouterOptions::default())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Drive one request through the router and decode the JSON body (`Null` when empty).
pub async fn send(app: &axum::Router, req: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("expected JSON body, got: {}", String::from_utf8_lossy(&bytes))
        })
    };
    TestResponse {
        status,
        headers: parts.headers,
        body,
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>, json: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match json {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Create an article as an authorised caller and return its id.
pub async fn create_article(app: &axum::Router, title: &str, text: &str) -> String {
    let token = mocks::mint_token("author");
    let resp = send(
        app,
        request(
            Method::POST,
            "/api/articles",
            Some(&token),
            Some(serde_json::json!({ "title": title, "text": text })),
        ),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED, "create failed: {}", resp.body);
    resp.body["id"].as_str().unwrap().to_string()
}

/// Assert that a response is an error body with the expected status and error string.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status, expected_status, "unexpected body: {}", resp.body);
    let ct = resp
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    assert_eq!(resp.body["error"], expected_error);
    let message = resp.body["message"].as_str().unwrap_or("");
    assert!(!message.is_empty(), "expected non-empty message field");
}

pub fn error_codes(resp: &TestResponse) -> Vec<String> {
    resp.body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
