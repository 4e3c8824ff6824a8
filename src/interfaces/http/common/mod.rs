//! Shared HTTP building blocks

pub mod access;
pub mod response;
pub mod rules;
pub mod validated_json;

use std::sync::Arc;

use crate::domain::RepositoryProvider;

pub use response::{ApiError, ApiResult, ErrorResponse};
pub use validated_json::ValidatedJson;

/// State shared by every `/api` handler
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
}
