use axum::{middleware, routing::get, Json, Router};
use configs::ApiConfig;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::errors::{collapse_error_status, panic_response};
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod activities;
pub mod ongs;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router: activity and ong resources plus health and docs.
pub fn build_router(state: ServerState, api: &ApiConfig, cors: CorsLayer) -> Router {
    with_layers(app_routes(state), api, cors)
}

/// Every route of the application, without the outer layers.
pub fn app_routes(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(activities::router())
        .merge(ongs::router())
        .with_state(state)
}

/// Error contract, panic catcher, CORS and tracing around `app`.
pub fn with_layers(app: Router, api: &ApiConfig, cors: CorsLayer) -> Router {
    // Collapsing sits inside the panic catcher; panic bodies are already 500.
    let app = if api.uniform_error_status {
        app.layer(middleware::map_response(collapse_error_status))
    } else {
        app
    };

    app.layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
