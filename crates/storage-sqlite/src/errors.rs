//! Storage-specific error types for SQLite operations.
//!
//! Diesel and r2d2 errors are wrapped here and converted to the
//! backend-agnostic error types defined in `dairytrack_core`.

use diesel::result::Error as DieselError;
use diesel_migrations::MigrationError;
use thiserror::Error;
use dairytrack_core::errors::{DatabaseError, Error};

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `dairytrack_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MigrationError> for StorageError {
    fn from(err: MigrationError) -> Self {
        StorageError::MigrationFailed(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::ReadOnlyTransaction,
                info,
            )) => Error::Database(DatabaseError::Unavailable(info.message().to_string())),
            StorageError::QueryFailed(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::MigrationFailed(e) => Error::Database(DatabaseError::MigrationFailed(e)),
            StorageError::Io(e) => Error::Database(DatabaseError::Internal(e.to_string())),
        }
    }
}

/// Extension trait for converting Diesel and r2d2 results to core results.
///
/// `From<DieselError> for Error` would violate the orphan rule, so the
/// conversion goes through [`StorageError`].
pub trait IntoCore<T> {
    fn into_core(self) -> dairytrack_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, DieselError> {
    fn into_core(self) -> dairytrack_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, r2d2::Error> {
    fn into_core(self) -> dairytrack_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}
