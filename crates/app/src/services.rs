//! Application services: use-case implementations.
//!
//! Each service struct accepts a port trait implementation via a generic
//! parameter (constructor injection) together with the deadline that bounds
//! every call it forwards.

mod deadline;

pub mod author_service;
pub mod product_service;

pub use deadline::DEFAULT_TIMEOUT;
