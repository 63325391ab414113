//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bookhub_app::ports::{AuthorRepository, ProductRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the resource routes at the root plus `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem, and a permissive
/// [`CorsLayer`] so browser front-ends on other origins can call the API.
pub fn build<AR, PR>(state: AppState<AR, PR>) -> Router
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
