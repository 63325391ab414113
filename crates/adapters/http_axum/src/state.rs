//! Shared application state for axum handlers.

use std::sync::Arc;

use bookhub_app::ports::{AuthorRepository, ProductRepository};
use bookhub_app::services::author_service::AuthorService;
use bookhub_app::services::product_service::ProductService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<AR, PR> {
    /// Author use cases.
    pub author_service: Arc<AuthorService<AR>>,
    /// Product use cases.
    pub product_service: Arc<ProductService<PR>>,
}

impl<AR, PR> Clone for AppState<AR, PR> {
    fn clone(&self) -> Self {
        Self {
            author_service: Arc::clone(&self.author_service),
            product_service: Arc::clone(&self.product_service),
        }
    }
}

impl<AR, PR> AppState<AR, PR>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(author_service: AuthorService<AR>, product_service: ProductService<PR>) -> Self {
        Self {
            author_service: Arc::new(author_service),
            product_service: Arc::new(product_service),
        }
    }
}
