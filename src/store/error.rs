//! Store error taxonomy.

use crate::domain::ArticleId;
use crate::search::QueryError;
use rusqlite::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Nothing is retried internally; every failure reaches the caller as one of
/// these variants. A failed write never leaves partial rows behind.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No article with the requested id exists.
    #[error("article not found: {id}")]
    NotFound { id: ArticleId },

    /// A foreign-key or uniqueness rule was broken.
    #[error("constraint violation: {message}")]
    ConstraintViolation {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// The open database could not be read, written, or locked.
    #[error("connection error: {0}")]
    Connection(#[source] rusqlite::Error),

    /// The search input was rejected before reaching the database.
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    /// The store could not be reached while applying the schema, or the
    /// existing schema conflicts with the one this build expects.
    #[error("schema error: {message}")]
    Schema {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    /// A deadline passed or the statement was interrupted.
    #[error("operation cancelled: {0}")]
    Cancelled(#[source] rusqlite::Error),

    /// Any other database error.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// An I/O error occurred while preparing the database location.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StoreError::ConstraintViolation {
                message: err.to_string(),
                source: err,
            },
            Some(ErrorCode::OperationInterrupted) => StoreError::Cancelled(err),
            Some(
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::PermissionDenied
                | ErrorCode::ReadOnly
                | ErrorCode::SystemIoFailure
                | ErrorCode::DiskFull,
            ) => StoreError::Connection(err),
            _ => StoreError::Database(err),
        }
    }
}

impl StoreError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        StoreError::Schema {
            message: message.into(),
            source: None,
        }
    }

    /// Reports an unreachable store as a schema failure, keeping the engine error.
    pub(crate) fn unreachable_as_schema(self) -> Self {
        match self {
            StoreError::Connection(source) => StoreError::Schema {
                message: format!("backing store is unreachable: {source}"),
                source: Some(source),
            },
            other => other,
        }
    }

    /// Returns true when the schema could not be applied.
    pub fn is_schema(&self) -> bool {
        matches!(self, StoreError::Schema { .. })
    }

    /// Returns true for integrity failures the caller must fix in its input.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, StoreError::ConstraintViolation { .. })
    }

    /// Returns true for lookup misses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
