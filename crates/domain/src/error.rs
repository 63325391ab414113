//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BookHubError`]
//! via `From`. The HTTP adapter is the only place that turns a classification
//! into a status code.

use std::time::Duration;

/// Top-level error for every bookhub operation.
#[derive(Debug, thiserror::Error)]
pub enum BookHubError {
    /// A required field is missing or out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist (or is hidden by the author join).
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A write collided with an existing record.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The operation did not finish before its deadline.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    /// Any storage failure: connection, statement, or row decoding.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BookHubError {
    /// Whether this error is an internal failure the caller cannot fix.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Storage(_))
    }
}

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("date_of_birth is required")]
    MissingDateOfBirth,

    #[error("price must not be negative")]
    NegativePrice,

    #[error("author_id must reference an author")]
    MissingAuthor,
}

/// A lookup by identifier matched no row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Product"`.
    pub entity: &'static str,
    /// Identifier that was looked up.
    pub id: String,
}

/// A uniqueness constraint rejected a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
}

/// A deadline elapsed before the store answered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} exceeded its deadline of {after:?}")]
pub struct TimeoutError {
    /// Name of the use case that was cancelled, e.g. `"product.fetch"`.
    pub operation: &'static str,
    pub after: Duration,
}
