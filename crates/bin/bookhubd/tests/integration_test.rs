//! End-to-end smoke tests for the full bookhubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`; no TCP port is bound.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use bookhub_adapter_http_axum::router;
use bookhub_adapter_http_axum::state::AppState;
use bookhub_adapter_storage_sqlite_sqlx::{
    Config, SqliteAuthorRepository, SqliteProductRepository,
};
use bookhub_app::services::author_service::AuthorService;
use bookhub_app::services::product_service::ProductService;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();
    let timeout = Duration::from_secs(2);

    let state = AppState::new(
        AuthorService::new(SqliteAuthorRepository::new(pool.clone()), timeout),
        ProductService::new(SqliteProductRepository::new(pool), timeout),
    );

    router::build(state)
}

async fn call(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let resp = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create_author(app: &axum::Router, name: &str) -> i64 {
    let (status, body) = call(
        app,
        "POST",
        "/author",
        Some(json!({ "name": name, "date_of_birth": "1920-10-08" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}

async fn create_product(app: &axum::Router, name: &str, author_id: i64) -> i64 {
    let (status, body) = call(
        app,
        "POST",
        "/product",
        Some(json!({
            "name": name,
            "price": 1999,
            "author_id": author_id,
            "description": "desert planet",
            "image": "dune.jpg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_author_crud_cycle() {
    let app = app().await;

    let (status, body) = call(&app, "GET", "/author", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": [] }));

    let id = create_author(&app, "Frank Herbert").await;

    let (status, body) = call(&app, "GET", &format!("/author/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Frank Herbert");
    assert_eq!(body["data"]["date_of_birth"], "1920-10-08");

    let (status, body) = call(
        &app,
        "PUT",
        &format!("/author/{id}"),
        Some(json!({ "name": "F. Herbert", "date_of_birth": "1920-10-08" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": null }));

    let (_, body) = call(&app, "GET", &format!("/author/{id}"), None).await;
    assert_eq!(body["data"]["name"], "F. Herbert");

    let (status, _) = call(&app, "DELETE", &format!("/author/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "GET", &format!("/author/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn should_reject_author_without_date_of_birth() {
    let app = app().await;

    let (status, body) = call(&app, "POST", "/author", Some(json!({ "name": "Anon" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "date_of_birth is required");
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_embed_author_when_reading_product() {
    let app = app().await;
    let author_id = create_author(&app, "Frank Herbert").await;
    let product_id = create_product(&app, "Dune", author_id).await;

    let (status, body) = call(&app, "GET", &format!("/product/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], product_id);
    assert_eq!(body["data"]["price"], 1999);
    assert_eq!(body["data"]["image"], "dune.jpg");
    assert_eq!(body["data"]["author"]["id"], author_id);
    assert_eq!(body["data"]["author"]["name"], "Frank Herbert");

    let (status, body) = call(&app, "GET", "/product", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_hide_product_whose_author_is_missing() {
    let app = app().await;

    // Accepted: nothing checks that the author exists on write.
    let product_id = create_product(&app, "Orphan", 404).await;

    let (status, body) = call(&app, "GET", &format!("/product/{product_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (_, body) = call(&app, "GET", "/product", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn should_hide_products_after_author_deleted() {
    let app = app().await;
    let author_id = create_author(&app, "Frank Herbert").await;
    create_product(&app, "Dune", author_id).await;

    call(&app, "DELETE", &format!("/author/{author_id}"), None).await;

    let (status, body) = call(&app, "GET", "/product", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn should_complete_product_update_and_delete() {
    let app = app().await;
    let author_id = create_author(&app, "Frank Herbert").await;
    let product_id = create_product(&app, "Dune", author_id).await;

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/product/{product_id}"),
        Some(json!({
            "name": "Dune Messiah",
            "price": 2499,
            "author_id": author_id,
            "description": "sequel",
            "image": "messiah.jpg"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, "GET", &format!("/product/{product_id}"), None).await;
    assert_eq!(body["data"]["name"], "Dune Messiah");
    assert_eq!(body["data"]["price"], 2499);

    let (status, body) = call(&app, "DELETE", &format!("/product/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": null }));

    // Deleting again still succeeds.
    let (status, _) = call(&app, "DELETE", &format!("/product/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&app, "GET", &format!("/product/{product_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_malformed_and_invalid_product_bodies() {
    let app = app().await;

    let (status, body) = call(&app, "POST", "/product", Some(json!({ "price": "free" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);

    let (status, body) = call(
        &app,
        "POST",
        "/product",
        Some(json!({ "name": "Dune", "price": -1, "author_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "price must not be negative");
}

#[tokio::test]
async fn should_treat_non_numeric_or_undecodable_id_as_not_found() {
    let app = app().await;

    let (status, body) = call(&app, "GET", "/product/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    for uri in ["/product/%FF", "/author/%C3%28"] {
        let (status, body) = call(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}
