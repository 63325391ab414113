//! HTTP error response mapping.
//!
//! The status code depends only on the error's classification, never on its
//! message text. Anything not recognized as a client error becomes a 500.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bookhub_domain::error::BookHubError;

use crate::envelope::failure;

/// Every way a handler can fail.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded into the expected shape.
    MalformedBody(JsonRejection),
    /// A classified failure from validation or a lower layer.
    Domain(BookHubError),
}

impl From<BookHubError> for ApiError {
    fn from(err: BookHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl ApiError {
    /// Status code for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Domain(BookHubError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Domain(BookHubError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Domain(BookHubError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Domain(BookHubError::Timeout(_) | BookHubError::Storage(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::MalformedBody(rejection) => rejection.body_text(),
            Self::Domain(err @ BookHubError::Storage(_)) => {
                tracing::error!(error = %err, cause = ?std::error::Error::source(err), "storage error");
                "internal server error".to_string()
            }
            Self::Domain(err) => {
                if err.is_internal() {
                    tracing::error!(error = %err, "request failed");
                } else {
                    tracing::debug!(error = %err, "request rejected");
                }
                err.to_string()
            }
        };

        failure(status, message)
    }
}
