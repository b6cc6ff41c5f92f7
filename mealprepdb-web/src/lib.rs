//! Reusable web middleware and extractors for building the mealprepdb API
//! with Axum: error types with HTTP conversions, validated query/body
//! extraction, request-id tracing and CORS.

pub mod errors;
pub mod extractors;
pub mod middleware;

// Re-export commonly used types and functions
pub use errors::{WebError, WebResult};
pub use extractors::{Validate, ValidatedJson, ValidatedQuery};
pub use middleware::{cors_layer, request_id_middleware, RequestId, REQUEST_ID_HEADER};
