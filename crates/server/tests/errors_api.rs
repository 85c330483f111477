mod support;

use axum::http::StatusCode;
use axum::{routing::get as get_route, Router};
use configs::ApiConfig;
use serde_json::json;
use tower_http::cors::CorsLayer;

use common::types::UNMAPPED_ERROR_MESSAGE;
use server::errors::ApiError;
use server::routes::{app_routes, with_layers};
use server::state::ServerState;
use support::*;

async fn boom() -> &'static str {
    panic!("handler exploded")
}

async fn missing() -> Result<&'static str, ApiError> {
    Err(ApiError::NotFound("nothing here".into()))
}

/// Application routes plus a panicking and a failing handler, under the real layer stack.
fn layered(uniform: bool) -> Router {
    let routes = app_routes(ServerState::in_memory(decoder(false)));
    let extra = Router::new().route("/boom", get_route(boom)).route("/missing", get_route(missing));
    with_layers(routes.merge(extra), &ApiConfig { uniform_error_status: uniform }, CorsLayer::very_permissive())
}

#[tokio::test]
async fn panics_become_unmapped_500() {
    for uniform in [true, false] {
        let app = layered(uniform);
        let (status, body) = send(&app, get("/boom")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "erro": true, "message": UNMAPPED_ERROR_MESSAGE }));
        // the service keeps answering after a panic
        assert_eq!(send(&app, get("/health")).await.0, StatusCode::OK);
    }
}

#[tokio::test]
async fn layer_stack_applies_status_policy() {
    let (status, body) = send(&layered(true), get("/missing")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "erro": true, "message": "nothing here" }));
    assert_eq!(send(&layered(false), get("/missing")).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn uniform_contract_collapses_every_failure() {
    let (app, _) = app();
    for uri in ["/activities/77", "/activities/not-a-number"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body["erro"], true);
    }
}

#[tokio::test]
async fn health_and_docs_are_public() {
    let (app, _) = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/activities/{id}/do"].is_object());
}
