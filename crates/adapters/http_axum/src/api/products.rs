//! JSON REST handlers for products.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use serde::Deserialize;

use bookhub_app::ports::{AuthorRepository, ProductRepository};
use bookhub_domain::error::BookHubError;
use bookhub_domain::id::{AuthorId, ProductId};
use bookhub_domain::product::{NewProduct, Product};

use super::id_segment;
use crate::envelope::{Created, Envelope, Operation};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a product.
///
/// Missing fields decode to their defaults and are then rejected by
/// validation; ids, timestamps and the embedded author are ignored.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: i64,
    pub author_id: Option<AuthorId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl ProductRequest {
    fn into_new_product(self) -> Result<NewProduct, BookHubError> {
        let mut builder = NewProduct::builder()
            .name(self.name)
            .price(self.price)
            .description(self.description)
            .image(self.image);
        if let Some(author_id) = self.author_id {
            builder = builder.author_id(author_id);
        }
        builder.build()
    }
}

/// `GET /product`
pub async fn list<AR, PR>(
    State(state): State<AppState<AR, PR>>,
) -> Result<Envelope<Vec<Product>>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    let products = state.product_service.fetch().await?;
    Ok(Envelope::new(Operation::List, products))
}

/// `POST /product`
pub async fn create<AR, PR>(
    State(state): State<AppState<AR, PR>>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Envelope<Created<ProductId>>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let product = req.into_new_product()?;
    let id = state.product_service.store(product).await?;
    Ok(Envelope::new(Operation::Create, Created { id }))
}

/// `GET /product/{productId}`
pub async fn get<AR, PR>(
    State(state): State<AppState<AR, PR>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Envelope<Product>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    let product = state
        .product_service
        .get_by_id(ProductId::from_path_lenient(&id_segment(id)))
        .await?;
    Ok(Envelope::new(Operation::Read, product))
}

/// `PUT /product/{productId}`
pub async fn update<AR, PR>(
    State(state): State<AppState<AR, PR>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Envelope<()>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let product = req.into_new_product()?;
    state
        .product_service
        .update(ProductId::from_path_lenient(&id_segment(id)), product)
        .await?;
    Ok(Envelope::empty(Operation::Update))
}

/// `DELETE /product/{productId}`
pub async fn delete<AR, PR>(
    State(state): State<AppState<AR, PR>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Envelope<()>, ApiError>
where
    AR: AuthorRepository + Send + Sync + 'static,
    PR: ProductRepository + Send + Sync + 'static,
{
    state
        .product_service
        .delete(ProductId::from_path_lenient(&id_segment(id)))
        .await?;
    Ok(Envelope::empty(Operation::Delete))
}
