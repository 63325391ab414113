//! # bookhub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AuthorRepository`: CRUD for authors
//!   - `ProductRepository`: CRUD for products, reads joined with their author
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AuthorService` / `ProductService`: deadline-bounded pass-through to
//!     the repositories
//!
//! ## Dependency rule
//! Depends on `bookhub-domain` only (plus `tokio::time` for deadlines).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
