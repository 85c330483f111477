#![allow(dead_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use configs::ApiConfig;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use service::auth::{TokenConfig, TokenDecoder};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

pub const SECRET: &str = "test-secret";

pub fn decoder(verify_signature: bool) -> TokenDecoder {
    TokenDecoder::new(&TokenConfig { jwt_secret: Some(SECRET.into()), verify_signature }).unwrap()
}

/// Router over in-memory services; `uniform` selects the 500-for-everything contract.
pub fn app_with(uniform: bool, verify_signature: bool) -> (Router, ServerState) {
    let state = ServerState::in_memory(decoder(verify_signature));
    let api = ApiConfig { uniform_error_status: uniform };
    (routes::build_router(state.clone(), &api, CorsLayer::very_permissive()), state)
}

pub fn app() -> (Router, ServerState) {
    app_with(true, false)
}

pub fn token(email: &str, secret: &str) -> String {
    let exp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() + 600;
    encode(&Header::default(), &json!({ "email": email, "exp": exp }), &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn json_req(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn with_token(mut req: Request<Body>, token: &str) -> Request<Body> {
    req.headers_mut().insert(header::AUTHORIZATION, format!("Bearer {}", token).parse().unwrap());
    req
}

/// Send one request; the body is parsed as JSON, `Null` when empty.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

pub fn activity_body(name: &str) -> Value {
    json!({ "name": name, "points": 10, "description": "Ajudar na feira", "mainImg": "feira.png", "ongId": 1 })
}

/// Create an activity through the API and return its id.
pub async fn create_activity(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, json_req("POST", "/activities", activity_body(name))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["result"]["id"].as_i64().unwrap()
}
