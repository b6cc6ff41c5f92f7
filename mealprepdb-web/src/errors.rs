//! Web-specific error types and conversions
//!
//! This module provides error types that integrate well with HTTP APIs
//! and can be converted to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mealprepdb_api_types::pagination::PageError;
use serde_json::json;
use thiserror::Error;

/// Web-specific error type for HTTP API operations
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebError::Conflict { .. } => StatusCode::CONFLICT,
            WebError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            WebError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            WebError::BadRequest { .. } => "BAD_REQUEST",
            WebError::NotFound { .. } => "NOT_FOUND",
            WebError::Conflict { .. } => "CONFLICT",
            WebError::Validation { .. } => "VALIDATION_ERROR",
            WebError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        WebError::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        WebError::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        WebError::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        WebError::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        WebError::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal detail stays server-side; clients get a generic body
        let message = match &self {
            WebError::Internal { message } => {
                tracing::error!("internal error: {}", message);
                "An unexpected error occurred.".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

impl From<PageError> for WebError {
    fn from(err: PageError) -> Self {
        WebError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WebError::validation("x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(WebError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(WebError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            WebError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_page_error_maps_to_validation() {
        let err: WebError = PageError::LimitTooLarge { limit: 3000, max: 2000 }.into();
        assert!(matches!(err, WebError::Validation { .. }));
    }
}
