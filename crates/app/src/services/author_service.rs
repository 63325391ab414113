//! Author service: deadline-bounded use-cases for managing authors.

use std::time::Duration;

use bookhub_domain::author::{Author, NewAuthor};
use bookhub_domain::error::BookHubError;
use bookhub_domain::id::AuthorId;

use super::deadline::bounded;
use crate::ports::AuthorRepository;

/// Application service for author CRUD operations.
///
/// Holds no business rules: it forwards each call to the repository under a
/// fixed deadline and returns the outcome verbatim.
pub struct AuthorService<R> {
    repo: R,
    timeout: Duration,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Create a new service backed by the given repository, bounding every
    /// call by `timeout`.
    pub fn new(repo: R, timeout: Duration) -> Self {
        Self { repo, timeout }
    }

    /// List all authors.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error propagated from the repository.
    pub async fn fetch(&self) -> Result<Vec<Author>, BookHubError> {
        bounded("author.fetch", self.timeout, self.repo.fetch()).await
    }

    /// Look up an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::NotFound`] when no author with `id` exists,
    /// [`BookHubError::Timeout`] when the deadline elapses, or a storage error.
    pub async fn get_by_id(&self, id: AuthorId) -> Result<Author, BookHubError> {
        bounded("author.get_by_id", self.timeout, self.repo.get_by_id(id)).await
    }

    /// Persist a new author and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error propagated from the repository.
    pub async fn store(&self, author: NewAuthor) -> Result<AuthorId, BookHubError> {
        bounded("author.store", self.timeout, self.repo.store(author)).await
    }

    /// Overwrite an existing author.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error propagated from the repository.
    pub async fn update(&self, id: AuthorId, author: NewAuthor) -> Result<(), BookHubError> {
        bounded("author.update", self.timeout, self.repo.update(id, author)).await
    }

    /// Delete an author by id.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error propagated from the repository.
    pub async fn delete(&self, id: AuthorId) -> Result<(), BookHubError> {
        bounded("author.delete", self.timeout, self.repo.delete(id)).await
    }
}
