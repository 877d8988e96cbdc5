#![allow(dead_code)]

use alunos_api::auth::{user_store::MIN_BCRYPT_COST, JwtHandler, UserStore};
use alunos_api::students::StudentStore;
use alunos_api::{build_router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

pub const SECRET: &str = "integration-test-secret";

/// Fresh app with seeded students and a cheap bcrypt cost
pub fn test_app() -> (Router, AppState) {
    let state = AppState::new(
        UserStore::with_cost(MIN_BCRYPT_COST),
        JwtHandler::new(SECRET),
        StudentStore::seeded(),
    );
    (build_router(state.clone()), state)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn authed(
    method: &str,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

/// Register and log in `username`, returning the issued token
pub async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let creds = serde_json::json!({ "username": username, "password": password });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/register", creds.clone()))
        .await
        .expect("register");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/login", creds))
        .await
        .expect("login");
    assert_eq!(response.status(), StatusCode::OK);

    read_json(response).await["jwt"]
        .as_str()
        .expect("jwt")
        .to_string()
}
