//! Author: the person a product is attributed to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BookHubError, ValidationError};
use crate::id::AuthorId;
use crate::time::Timestamp;

/// A persisted author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date_of_birth: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The mutable fields of an [`Author`], as supplied by a client on create or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl NewAuthor {
    /// Create a builder for constructing a [`NewAuthor`].
    #[must_use]
    pub fn builder() -> NewAuthorBuilder {
        NewAuthorBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), BookHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewAuthor`].
#[derive(Debug, Default)]
pub struct NewAuthorBuilder {
    name: Option<String>,
    date_of_birth: Option<NaiveDate>,
}

impl NewAuthorBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Consume the builder, validate, and return a [`NewAuthor`].
    ///
    /// # Errors
    ///
    /// Returns [`BookHubError::Validation`] if `name` is missing or blank, or
    /// if `date_of_birth` is missing.
    pub fn build(self) -> Result<NewAuthor, BookHubError> {
        let date_of_birth = self
            .date_of_birth
            .ok_or(ValidationError::MissingDateOfBirth)?;
        let author = NewAuthor {
            name: self.name.unwrap_or_default(),
            date_of_birth,
        };
        author.validate()?;
        Ok(author)
    }
}
