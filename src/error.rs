//! Error types for the posts API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::MessageResponse;

// == Api Error Enum ==
/// Unified error type for the posts API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No post with the requested id.
    ///
    /// The status differs per operation: lookups answer 400, while
    /// update and delete answer 404.
    #[error("{message}")]
    NotFound { message: String, status: StatusCode },

    /// Missing title or unreadable body
    #[error("{0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Not-found error as reported by `GET /api/:id`.
    pub fn lookup_miss(raw_id: &str) -> Self {
        ApiError::NotFound {
            message: format!("Post Not Found At {}", raw_id),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// Not-found error as reported by `PUT` and `DELETE` on `/api/:id`.
    pub fn mutation_miss() -> Self {
        ApiError::NotFound {
            message: "not found".to_string(),
            status: StatusCode::NOT_FOUND,
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { status, .. } => *status,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(MessageResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the posts API.
pub type Result<T> = std::result::Result<T, ApiError>;
