//! Application state injected into handlers

use mealprepdb_storage::DatabaseConnection;

/// Shared state for all endpoint handlers.
///
/// The connection pool is explicitly constructed at startup and handed in;
/// there is no ambient global database state.
#[derive(Clone)]
pub struct AppContext {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Path prefix under which API routes are mounted; also used for
    /// resource links and next-page URLs
    pub api_prefix: String,
}

impl AppContext {
    pub fn new(db: DatabaseConnection, api_prefix: impl Into<String>) -> Self {
        Self {
            db,
            api_prefix: api_prefix.into(),
        }
    }
}
