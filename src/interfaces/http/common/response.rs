//! Error bodies and the mapping from domain errors to HTTP statuses

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Body of every non-2xx JSON response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<T, ApiError>;

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message)))
}

pub fn bad_request(message: impl Into<String>) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, message)
}

pub fn forbidden(message: impl Into<String>) -> ApiError {
    api_error(StatusCode::FORBIDDEN, message)
}

pub fn not_found(message: impl Into<String>) -> ApiError {
    api_error(StatusCode::NOT_FOUND, message)
}

pub fn conflict(message: impl Into<String>) -> ApiError {
    api_error(StatusCode::CONFLICT, message)
}

/// Map a domain error onto a response.
///
/// Storage failures are logged and answered with the generic `failure`
/// message; everything else carries the error's own text.
pub fn from_domain(e: DomainError, failure: &str) -> ApiError {
    match e {
        DomainError::NotFound { entity, .. } => not_found(format!("{} not found", entity)),
        DomainError::Validation(msg) => bad_request(msg),
        DomainError::Conflict(msg) => conflict(msg),
        DomainError::Storage(msg) => {
            error!("{}: {}", failure, msg);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, failure)
        }
    }
}

/// `map_err` adapter for [`from_domain`]
pub fn or_fail(failure: &'static str) -> impl Fn(DomainError) -> ApiError {
    move |e| from_domain(e, failure)
}
