//! # bookhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `bookhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Apply the idempotent table schema on startup
//! - Map between domain types and database rows, classifying failures
//!
//! ## Dependency rule
//! Depends on `bookhub-app` (for port traits) and `bookhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod author_repo;
mod error;
mod pool;
mod product_repo;
mod row;

pub use author_repo::SqliteAuthorRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use product_repo::SqliteProductRepository;
