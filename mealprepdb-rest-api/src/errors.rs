//! REST API error types and conversions

use axum::response::{IntoResponse, Response};
use mealprepdb_storage::StorageError;
use mealprepdb_web::WebError;
use thiserror::Error;

/// REST API error type
#[derive(Error, Debug)]
pub enum RestError {
    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("web error")]
    Web(#[from] WebError),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        // Shape the response through WebError so every error body is
        // {"error": {code, message}}
        let web_error = match self {
            RestError::Storage(err) => match err {
                StorageError::NotFound => WebError::not_found("Not Found."),
                StorageError::Conflict(message) => WebError::conflict(message),
                StorageError::Validation(message) => WebError::validation(message),
                other => WebError::internal(other.to_string()),
            },
            RestError::Web(err) => err,
        };

        web_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_storage_errors_map_to_status_codes() {
        let cases = [
            (StorageError::NotFound, StatusCode::NOT_FOUND),
            (
                StorageError::Conflict("duplicate".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                StorageError::Validation("bad".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                StorageError::Migration("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            let response = RestError::from(err).into_response();
            assert_eq!(response.status(), status);
        }
    }
}
