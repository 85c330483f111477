use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use serde::de::DeserializeOwned;
use service::validation::Validate;
use tracing::warn;

use crate::errors::ApiError;

pub const TOKEN_MISSING: &str = "Token não informado";

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Token part of `Authorization: <scheme> <token>`.
///
/// Only the second space-separated word is taken; the scheme is not checked.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(' ').nth(1))
        .filter(|t| !t.is_empty())
}

/// Rejects requests without a token word in `Authorization`.
pub async fn require_token(req: Request, next: Next) -> Result<Response, ApiError> {
    if bearer_token(req.headers()).is_none() {
        warn!(path = %req.uri().path(), "missing bearer token");
        return Err(ApiError::Unauthorized(TOKEN_MISSING.into()));
    }
    Ok(next.run(req).await)
}

/// Checks the JSON body against `T`'s rules before the handler runs.
/// The buffered bytes are forwarded untouched.
pub async fn validate_body<T>(req: Request, next: Next) -> Result<Response, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ApiError::Validation(format!("unreadable body: {}", e)))?;
    let input: T = serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Validation(format!("invalid body: {}", e)))?;
    input.validate()?;
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
