//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod authors;
#[allow(clippy::missing_errors_doc)]
pub mod products;

use axum::Router;
use axum::extract::Path;
use axum::extract::rejection::PathRejection;
use axum::routing::get;

use bookhub_app::ports::{AuthorRepository, ProductRepository};

use crate::state::AppState;

/// Build the resource routes for `/product` and `/author`.
pub fn routes<AR, PR>() -> Router<AppState<AR, PR>>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        // Products
        .route(
            "/product",
            get(products::list::<AR, PR>).post(products::create::<AR, PR>),
        )
        .route(
            "/product/{productId}",
            get(products::get::<AR, PR>)
                .put(products::update::<AR, PR>)
                .delete(products::delete::<AR, PR>),
        )
        // Authors
        .route(
            "/author",
            get(authors::list::<AR, PR>).post(authors::create::<AR, PR>),
        )
        .route(
            "/author/{authorId}",
            get(authors::get::<AR, PR>)
                .put(authors::update::<AR, PR>)
                .delete(authors::delete::<AR, PR>),
        )
}

/// The raw id segment, or `""` when it does not decode.
///
/// An undecodable segment is treated like any other non-numeric id, so it
/// ends in a not-found answer inside the envelope.
pub(crate) fn id_segment(path: Result<Path<String>, PathRejection>) -> String {
    match path {
        Ok(Path(segment)) => segment,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "undecodable id segment");
            String::new()
        }
    }
}
