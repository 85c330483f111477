use axum::{
    body::Bytes,
    extract::{rejection::{BytesRejection, JsonRejection, PathRejection}, Path, State},
    http::{HeaderMap, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use service::activity::domain::{CreateActivityInput, DoActivityInput, UpdateActivityInput};
use tracing::info;

use models::activity;

use crate::errors::ApiError;
use crate::middleware::{bearer_token, validate_body};
use crate::state::ServerState;

pub const ASSIGN_FAILED: &str = "Erro ao atribuir atividade para usuário";
pub const DO_FAILED: &str = "Erro ao realizar atividade!";
pub const ASSIGNED: &str = "Atividade atribuída com sucesso!";
pub const DONE: &str = "Atividade realizada com sucesso!";

#[derive(Debug, Serialize)]
pub struct ActivityList {
    pub activities: Vec<activity::Model>,
}

#[derive(Debug, Serialize)]
pub struct ActivityResult {
    pub result: activity::Model,
}

#[derive(Debug, Serialize)]
pub struct ActivityMessage {
    pub message: &'static str,
    pub activity: activity::Model,
}

/// Only creation runs behind the body validator.
pub fn router() -> Router<ServerState> {
    let create = Router::new()
        .route("/activities", post(create))
        .route_layer(middleware::from_fn(validate_body::<CreateActivityInput>));

    Router::new()
        .route("/activities", get(list).put(update))
        .route("/activities/:id", get(find).delete(remove))
        .route("/activities/:id/assign", post(assign))
        .route("/activities/:id/do", post(complete))
        .merge(create)
}

#[utoipa::path(
    get, path = "/activities", tag = "activities",
    responses(
        (status = 201, description = "All activities"),
        (status = 500, description = "Failure envelope")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<(StatusCode, Json<ActivityList>), ApiError> {
    let activities = state.activities.find_all().await?;
    info!(count = activities.len(), "list activities");
    Ok((StatusCode::CREATED, Json(ActivityList { activities })))
}

#[utoipa::path(
    put, path = "/activities", tag = "activities",
    request_body = crate::openapi::UpdateActivityDoc,
    responses(
        (status = 204, description = "Updated, or nothing matched"),
        (status = 500, description = "Failure envelope")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    body: Result<Json<UpdateActivityInput>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(input) = body?;
    let rows = state.activities.update(input.activity_id, &input.activity).await?;
    info!(id = input.activity_id, rows, "update activity");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post, path = "/activities", tag = "activities",
    request_body = crate::openapi::CreateActivityDoc,
    responses(
        (status = 200, description = "Created activity under `result`"),
        (status = 500, description = "Failure envelope")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateActivityInput>, JsonRejection>,
) -> Result<Json<ActivityResult>, ApiError> {
    let Json(input) = body?;
    let result = state.activities.create(input).await?;
    Ok(Json(ActivityResult { result }))
}

#[utoipa::path(
    get, path = "/activities/{id}", tag = "activities",
    params(("id" = i32, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Activity under `result`"),
        (status = 500, description = "Failure envelope")
    )
)]
pub async fn find(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ActivityResult>, ApiError> {
    let Path(id) = id?;
    let result = state.activities.find_by_id(id).await?;
    Ok(Json(ActivityResult { result }))
}

#[utoipa::path(
    delete, path = "/activities/{id}", tag = "activities",
    params(("id" = i32, Path, description = "Activity id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Failure envelope")
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.activities.delete(id).await?;
    info!(id, "deleted activity");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post, path = "/activities/{id}/assign", tag = "activities",
    params(("id" = i32, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Assigned to the token's user"),
        (status = 500, description = "Failure envelope")
    ),
    security(("bearer" = []))
)]
pub async fn assign(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    headers: HeaderMap,
) -> Result<Json<ActivityMessage>, ApiError> {
    let Path(id) = id?;
    let token = bearer_token(&headers).ok_or_else(|| ApiError::Unauthorized(ASSIGN_FAILED.into()))?;
    let email = state.tokens.email(token)?;
    let user = state.users.find_by_email(&email).await?;
    let activity = state.activities.assign(id, user.id).await?;
    info!(id, user_id = user.id, "activity assigned");
    Ok(Json(ActivityMessage { message: ASSIGNED, activity }))
}

#[utoipa::path(
    post, path = "/activities/{id}/do", tag = "activities",
    params(("id" = i32, Path, description = "Activity id")),
    request_body = crate::openapi::DoActivityDoc,
    responses(
        (status = 200, description = "Completed by the token's user"),
        (status = 500, description = "Failure envelope")
    ),
    security(("bearer" = []))
)]
pub async fn complete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ActivityMessage>, ApiError> {
    let Path(id) = id?;
    let token = bearer_token(&headers).ok_or_else(|| ApiError::Unauthorized(DO_FAILED.into()))?;
    let input = do_input(&body.map_err(|e| ApiError::Validation(e.body_text()))?)?;
    let email = state.tokens.email(token)?;
    let user = state.users.find_by_email(&email).await?;
    let activity = state.activities.complete(id, user.id, input.realization_field).await?;
    info!(id, user_id = user.id, "activity done");
    Ok(Json(ActivityMessage { message: DONE, activity }))
}

/// `realizationField` is optional, so an empty body completes with no payload.
fn do_input(bytes: &[u8]) -> Result<DoActivityInput, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(DoActivityInput::default());
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::Validation(format!("invalid body: {}", e)))
}
