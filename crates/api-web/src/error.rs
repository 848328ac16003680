//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::DatabaseError;
use identity::IdentityError;
use research::ResearchError;
use thiserror::Error;

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Identity layer error.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Pipeline error.
    #[error(transparent)]
    Research(#[from] ResearchError),

    /// Store error reaching a handler directly.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Identity(err) => match err {
                IdentityError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                // Duplicate email reports as 400, not 409.
                IdentityError::Conflict => StatusCode::BAD_REQUEST,
                IdentityError::InvalidCredentials | IdentityError::InvalidToken => {
                    StatusCode::UNAUTHORIZED
                }
                IdentityError::UserNotFound => StatusCode::NOT_FOUND,
                IdentityError::Hash(_) | IdentityError::Database(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Research(err) => match err {
                ResearchError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                ResearchError::NotFound { .. } => StatusCode::NOT_FOUND,
                ResearchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Database(err) => match err {
                DatabaseError::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(%status, "Request failed: {}", message);
        } else {
            tracing::debug!(%status, "Request rejected: {}", message);
        }

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
