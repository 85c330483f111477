use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorEnvelope;
use models::errors::ModelError;
use service::auth::errors::TokenError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Failure of a request, rendered as `{ "erro": true, "message": ... }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

/// Response extension marking a body produced by [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMarker;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        error!(status = status.as_u16(), error = %msg, "request failed");
        let mut res = (status, Json(ErrorEnvelope::new(msg))).into_response();
        res.extensions_mut().insert(ErrorMarker);
        res
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            return ApiError::Validation(match e {
                ServiceError::Validation(m) | ServiceError::Model(ModelError::Validation(m)) => m,
                other => other.to_string(),
            });
        }
        match e {
            ServiceError::NotFound(m) => ApiError::NotFound(m),
            ServiceError::Conflict(m) => ApiError::Conflict(m),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Config(_) => ApiError::Internal(e.to_string()),
            _ => ApiError::Unauthorized(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self { ApiError::Validation(rej.body_text()) }
}

impl From<PathRejection> for ApiError {
    fn from(rej: PathRejection) -> Self { ApiError::Validation(rej.body_text()) }
}

/// Rewrites the status of every [`ApiError`] response to 500.
pub async fn collapse_error_status(mut res: Response) -> Response {
    if res.extensions().get::<ErrorMarker>().is_some() {
        *res.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    }
    res
}

/// Body returned when a handler panics.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = %detail, "handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorEnvelope::unmapped())).into_response()
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
