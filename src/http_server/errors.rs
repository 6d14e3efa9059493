//! HTTP API errors
//!
//! Store failures are logged server-side with full detail; the response
//! body carries only a generic message. A missing row maps to a bare
//! 404 with no body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::error::StoreError;
use crate::observability::Logger;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested row does not exist
    #[error("resource not found")]
    NotFound,

    /// Store read failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Handler infrastructure failure (blocking task panicked or was
    /// cancelled)
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to expose to clients
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::NotFound => "resource not found",
            ApiError::Store(_) | ApiError::Internal(_) => "error retrieving data",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            Logger::error(
                "request_failed",
                &[("cause", &self.to_string()), ("status", status.as_str())],
            );
        }

        match self {
            // Not-found responds with an empty body
            ApiError::NotFound => status.into_response(),
            _ => {
                let body = Json(ErrorResponse {
                    error: self.public_message().to_string(),
                    code: status.as_u16(),
                });
                (status, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(StoreError::Unavailable {
                path: PathBuf::from("league.db"),
            })
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("join error".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_detail_not_exposed() {
        let err = ApiError::Store(StoreError::Unavailable {
            path: PathBuf::from("/secret/path/league.db"),
        });
        assert!(!err.public_message().contains("/secret/path"));
    }
}
