//! Product: a sellable item attributed to exactly one [`Author`].

use serde::{Deserialize, Serialize};

use crate::author::Author;
use crate::error::{BookHubError, ValidationError};
use crate::id::{AuthorId, ProductId};
use crate::time::Timestamp;

/// A persisted product, with its author embedded from the join.
///
/// A product row whose `author_id` matches no author is never materialized
/// as a `Product`; reads use inner-join semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub author_id: AuthorId,
    pub description: String,
    /// URI or path of the cover image.
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author: Author,
}

/// The mutable fields of a [`Product`], as supplied by a client on create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub author_id: AuthorId,
    pub description: String,
    pub image: String,
}

impl NewProduct {
    /// Create a builder for constructing a [`NewProduct`].
    #[must_use]
    pub fn builder() -> NewProductBuilder {
        NewProductBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Validation`] when `name` is blank, `price` is
    /// negative, or `author_id` is not a store-assigned id.
    pub fn validate(&self) -> Result<(), BookHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.price < 0 {
            return Err(ValidationError::NegativePrice.into());
        }
        if !self.author_id.is_assigned() {
            return Err(ValidationError::MissingAuthor.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewProduct`].
#[derive(Debug, Default)]
pub struct NewProductBuilder {
    name: Option<String>,
    price: Option<i64>,
    author_id: Option<AuthorId>,
    description: Option<String>,
    image: Option<String>,
}

impl NewProductBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn author_id(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewProduct`].
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Validation`] if any invariant of
    /// [`NewProduct::validate`] fails.
    pub fn build(self) -> Result<NewProduct, BookHubError> {
        let product = NewProduct {
            name: self.name.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            author_id: self.author_id.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        };
        product.validate()?;
        Ok(product)
    }
}
