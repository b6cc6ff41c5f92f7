//! Storage layer for mealprepdb
//!
//! Sea-ORM entities for the seven tables, a generic list/detail query
//! executor with a window-function total count, and one repository per
//! resource. Repository operations take any [`sea_orm::ConnectionTrait`]
//! implementor so the same code runs against the pool or the per-request
//! transaction.

pub mod config;
pub mod connection;
pub mod entities;
pub mod error;
pub mod migrations;
pub mod query;
pub mod repositories;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::DatabaseConfig;
pub use connection::DatabaseConnection;
pub use error::{StorageError, StorageResult};
pub use query::{fetch_one, fetch_page, Page};
