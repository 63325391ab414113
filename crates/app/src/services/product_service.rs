//! Product service: deadline-bounded use-cases for managing products.

use std::time::Duration;

use bookhub_domain::error::BookHubError;
use bookhub_domain::id::ProductId;
use bookhub_domain::product::{NewProduct, Product};

use super::deadline::bounded;
use crate::ports::ProductRepository;

/// Application service for product CRUD operations.
pub struct ProductService<R> {
    repo: R,
    timeout: Duration,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new service backed by the given repository, bounding every
    /// call by `timeout`.
    pub fn new(repo: R, timeout: Duration) -> Self {
        Self { repo, timeout }
    }

    /// List all products that have an author.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error propagated from the repository.
    pub async fn fetch(&self) -> Result<Vec<Product>, BookHubError> {
        bounded("product.fetch", self.timeout, self.repo.fetch()).await
    }

    /// Look up a product, with its author, by id.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::NotFound`] when the product or its author is
    /// missing, [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, BookHubError> {
        bounded("product.get_by_id", self.timeout, self.repo.get_by_id(id)).await
    }

    /// Persist a new product and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error propagated from the repository.
    pub async fn store(&self, product: NewProduct) -> Result<ProductId, BookHubError> {
        bounded("product.store", self.timeout, self.repo.store(product)).await
    }

    /// Overwrite an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error propagated from the repository.
    pub async fn update(&self, id: ProductId, product: NewProduct) -> Result<(), BookHubError> {
        bounded("product.update", self.timeout, self.repo.update(id, product)).await
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Timeout`] when the deadline elapses, or a
    /// storage error propagated from the repository.
    pub async fn delete(&self, id: ProductId) -> Result<(), BookHubError> {
        bounded("product.delete", self.timeout, self.repo.delete(id)).await
    }
}
