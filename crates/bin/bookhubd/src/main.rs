//! # bookhubd: bookhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`.env`, config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and apply the schema
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories and the deadline
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bookhub_adapter_http_axum::state::AppState;
use bookhub_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteAuthorRepository, SqliteProductRepository,
};
use bookhub_app::services::author_service::AuthorService;
use bookhub_app::services::product_service::ProductService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is the normal case in production.
    let _ = dotenvy::dotenv();

    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to open database")?;
    let pool = db.pool().clone();

    // Repositories
    let author_repo = SqliteAuthorRepository::new(pool.clone());
    let product_repo = SqliteProductRepository::new(pool);

    // Services
    let timeout = config.timeout();
    let author_service = AuthorService::new(author_repo, timeout);
    let product_service = ProductService::new(product_repo, timeout);

    // HTTP
    let state = AppState::new(author_service, product_service);
    let app = bookhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, ?timeout, "bookhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("bookhubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
