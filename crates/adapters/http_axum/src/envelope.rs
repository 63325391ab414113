//! The uniform `{success, data | message}` JSON envelope.
//!
//! A fresh envelope is built for every response; nothing here is shared
//! between requests.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The kind of operation a handler performed, which alone decides the
/// success status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Status code returned when the operation succeeds.
    #[must_use]
    pub const fn success_status(self) -> StatusCode {
        match self {
            Self::Create => StatusCode::CREATED,
            Self::List | Self::Read | Self::Update | Self::Delete => StatusCode::OK,
        }
    }
}

/// Body returned by `Create` endpoints: the id the store assigned.
#[derive(Debug, Serialize)]
pub struct Created<I> {
    pub id: I,
}

#[derive(Serialize)]
struct SuccessBody<T> {
    success: bool,
    data: T,
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    message: String,
}

/// A successful response carrying typed `data`.
///
/// `Envelope<()>` serializes its data as `null`.
#[derive(Debug)]
pub struct Envelope<T> {
    operation: Operation,
    data: T,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap `data` as the result of `operation`.
    pub fn new(operation: Operation, data: T) -> Self {
        Self { operation, data }
    }
}

impl Envelope<()> {
    /// A success with `null` data.
    #[must_use]
    pub fn empty(operation: Operation) -> Self {
        Self {
            operation,
            data: (),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            success: true,
            data: self.data,
        };
        (self.operation.success_status(), Json(body)).into_response()
    }
}

/// Build a failure response with the given status and message.
pub(crate) fn failure(status: StatusCode, message: String) -> Response {
    let body = FailureBody {
        success: false,
        message,
    };
    (status, Json(body)).into_response()
}
