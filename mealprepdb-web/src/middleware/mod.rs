pub mod cors;
pub mod request_id;

// Re-export layer creation functions
pub use cors::cors_layer;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
