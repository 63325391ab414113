//! # bookhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for products (`/product`, `/product/{productId}`) and
//!   authors (`/author`, `/author/{authorId}`)
//! - Decode and validate request bodies (undecodable → 422, invalid → 400)
//! - Map application results into the uniform `{success, data | message}`
//!   envelope, and error classifications into status codes
//!
//! ## Dependency rule
//! Depends on `bookhub-app` (for port traits and services) and `bookhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod envelope;
pub mod error;
pub mod router;
pub mod state;
