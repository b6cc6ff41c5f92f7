//! Storage error taxonomy

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Storage-related errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// A detail lookup or update target does not exist
    #[error("row not found")]
    NotFound,

    /// A write was rejected by a uniqueness or foreign-key constraint,
    /// or an update matched zero rows
    #[error("conflicting write: {0}")]
    Conflict(String),

    /// Input rejected before reaching the store
    #[error("validation failed: {0}")]
    Validation(String),

    /// Migration failure
    #[error("migration error: {0}")]
    Migration(String),

    /// Any other database error
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

/// Storage result type
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Classify a write failure.
    ///
    /// Unique and foreign-key violations become [`StorageError::Conflict`],
    /// as does an update that matched no rows — the HTTP surface reports
    /// both as 409 (see DESIGN.md).
    pub fn from_write_err(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => StorageError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StorageError::Conflict(msg),
            _ => match err {
                DbErr::RecordNotUpdated => {
                    StorageError::Conflict("no row matched the given id".to_string())
                }
                other => StorageError::Db(other),
            },
        }
    }
}
