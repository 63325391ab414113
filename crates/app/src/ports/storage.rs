//! Storage port: repository traits for persistence.
//!
//! Every method maps to exactly one statement against the store. None of
//! them retry or cache.

use std::future::Future;

use bookhub_domain::author::{Author, NewAuthor};
use bookhub_domain::error::BookHubError;
use bookhub_domain::id::{AuthorId, ProductId};
use bookhub_domain::product::{NewProduct, Product};

/// Repository for persisting and querying [`Author`]s.
pub trait AuthorRepository {
    /// List every author, in store order. An empty table yields an empty list.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Author>, BookHubError>> + Send;

    /// Get an author by id.
    ///
    /// Fails with [`BookHubError::NotFound`] when no row matches.
    fn get_by_id(&self, id: AuthorId)
    -> impl Future<Output = Result<Author, BookHubError>> + Send;

    /// Insert a new author, stamping both timestamps with the current time.
    /// Returns the id assigned by the store.
    fn store(&self, author: NewAuthor)
    -> impl Future<Output = Result<AuthorId, BookHubError>> + Send;

    /// Overwrite the mutable fields of an author and refresh `updated_at`.
    fn update(
        &self,
        id: AuthorId,
        author: NewAuthor,
    ) -> impl Future<Output = Result<(), BookHubError>> + Send;

    /// Delete an author by id. Deleting a missing id succeeds.
    fn delete(&self, id: AuthorId) -> impl Future<Output = Result<(), BookHubError>> + Send;
}

/// Repository for persisting and querying [`Product`]s.
///
/// Reads join each product with its author; products whose author is
/// missing are excluded.
pub trait ProductRepository {
    /// List every product that has a matching author, in store order.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>, BookHubError>> + Send;

    /// Get a product (with its author) by id.
    ///
    /// Fails with [`BookHubError::NotFound`] when no row matches or when the
    /// product's author does not exist.
    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Product, BookHubError>> + Send;

    /// Insert a new product, stamping both timestamps with the current time.
    /// Returns the id assigned by the store.
    fn store(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<ProductId, BookHubError>> + Send;

    /// Overwrite the mutable fields of a product and refresh `updated_at`.
    fn update(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> impl Future<Output = Result<(), BookHubError>> + Send;

    /// Delete a product by id. Deleting a missing id succeeds.
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<(), BookHubError>> + Send;
}
