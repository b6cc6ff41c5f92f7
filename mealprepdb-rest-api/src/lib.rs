//! REST API implementation for mealprepdb
//!
//! Paginated list/detail endpoints plus create/update mutations for every
//! resource, one transaction per request, and presenters carrying related
//! resource links.

pub mod app;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod models;

pub use app::{create_rest_app, AppConfig};
pub use context::AppContext;
pub use errors::{RestError, RestResult};
