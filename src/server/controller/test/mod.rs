//! Router-level tests: requests go through the full `router::app`, including auth,
//! validation and error mapping.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;

use crate::server::{
    router,
    service::auth::{google::GoogleVerifier, token::TokenService},
    state::AppState,
};

mod schedule;

const SECRET: &str = "controller-test-secret";

/// App wired to the test database. Google sign-in is left unconfigured.
fn app(db: &DatabaseConnection) -> Router {
    let google = GoogleVerifier::new(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:9/tokeninfo").unwrap(),
        Vec::new(),
    );

    router::app(AppState::new(
        db.clone(),
        TokenService::new(SECRET, 30),
        google,
    ))
}

fn token_for(user_id: i32) -> String {
    TokenService::new(SECRET, 30).issue(user_id).unwrap()
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` when the body is empty).
async fn send(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|body| body.to_string());

    send_raw(db, method, uri, token, body.as_deref()).await
}

/// Like `send`, but the body is passed through untouched so malformed JSON can be sent.
async fn send_raw(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
