use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use quill_core::blog::ArticleError;
use quill_core::storage::{repository_error_to_status_code, RepositoryError};

/// API error type with a stable response shape.
///
/// Every failure maps to a distinct non-200 status with a JSON body of
/// the form `{"error": "..."}`. Nothing is swallowed: store failures,
/// malformed input, and missing records all surface to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl From<ArticleError> for ApiError {
    fn from(err: ArticleError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(err) => StatusCode::from_u16(repository_error_to_status_code(err))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(status = %status, error = %self, "Request failed");

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
