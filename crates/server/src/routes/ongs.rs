use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use service::ong::domain::CreateOngInput;
use tracing::info;

use models::ong;

use crate::errors::ApiError;
use crate::middleware::{require_token, validate_body};
use crate::state::ServerState;

#[derive(Debug, Serialize)]
pub struct OngList {
    pub ongs: Vec<ong::Model>,
}

#[derive(Debug, Serialize)]
pub struct OngResult {
    pub result: ong::Model,
}

/// Reads need a token; creation only needs a well-formed body.
pub fn router() -> Router<ServerState> {
    let reads = Router::new()
        .route("/ongs", get(list))
        .route("/ongs/:id", get(find))
        .route_layer(middleware::from_fn(require_token));
    let writes = Router::new()
        .route("/ongs", post(create))
        .route_layer(middleware::from_fn(validate_body::<CreateOngInput>));
    reads.merge(writes)
}

#[utoipa::path(
    get, path = "/ongs", tag = "ongs",
    responses((status = 200, description = "All ongs"), (status = 500, description = "Failure envelope")),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<OngList>, ApiError> {
    let ongs = state.ongs.find_all().await?;
    Ok(Json(OngList { ongs }))
}

#[utoipa::path(
    get, path = "/ongs/{id}", tag = "ongs",
    params(("id" = i32, Path, description = "Ong id")),
    responses((status = 200, description = "Ong under `result`"), (status = 500, description = "Failure envelope")),
    security(("bearer" = []))
)]
pub async fn find(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<OngResult>, ApiError> {
    let Path(id) = id?;
    let result = state.ongs.find_by_id(id).await?;
    Ok(Json(OngResult { result }))
}

#[utoipa::path(
    post, path = "/ongs", tag = "ongs",
    request_body = crate::openapi::CreateOngDoc,
    responses((status = 201, description = "Created ong under `result`"), (status = 500, description = "Failure envelope"))
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateOngInput>, JsonRejection>,
) -> Result<(StatusCode, Json<OngResult>), ApiError> {
    let Json(input) = body?;
    let result = state.ongs.create(input).await?;
    info!(id = result.id, "created ong");
    Ok((StatusCode::CREATED, Json(OngResult { result })))
}
