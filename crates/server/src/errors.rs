use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the HTTP layer. Response bodies carry a generic message only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("user not found")]
    NotFound,
    #[error("invalid user id: {0}")]
    InvalidIdentifier(String),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "User not found"),
            ApiError::InvalidIdentifier(_) => (StatusCode::BAD_REQUEST, "Invalid user id"),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(id) => {
                debug!(%id, "service reported missing user");
                ApiError::NotFound
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidIdentifier(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        debug!(error = %self, %status, "request rejected");
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}
