//! # bookhub-domain
//!
//! Pure domain model for the bookhub catalogue service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Authors** and **Products** (a product embeds its author on read)
//! - Define the client-supplied write shapes (`NewAuthor`, `NewProduct`) and
//!   their field validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod author;
pub mod product;
