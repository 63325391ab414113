//! Storage-specific error type wrapping sqlx errors.

use bookhub_domain::error::{BookHubError, ConflictError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for BookHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Classify a failed statement against `entity`.
///
/// Unique-constraint violations become [`BookHubError::Conflict`]; every
/// other failure, row decoding included, is an opaque storage error.
pub(crate) fn classify(entity: &'static str, err: sqlx::Error) -> BookHubError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            tracing::warn!(entity, error = %db_err, "unique constraint violated");
            return ConflictError { entity }.into();
        }
    }
    tracing::error!(entity, error = %err, "storage statement failed");
    StorageError::from(err).into()
}
