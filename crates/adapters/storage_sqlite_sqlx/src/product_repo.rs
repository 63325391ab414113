//! `SQLite` implementation of [`ProductRepository`].
//!
//! Reads go through an inner join with `author`, so a product is only
//! materialized together with its author.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bookhub_app::ports::ProductRepository;
use bookhub_domain::error::{BookHubError, NotFoundError};
use bookhub_domain::id::ProductId;
use bookhub_domain::product::{NewProduct, Product};
use bookhub_domain::time::now;

use crate::error::classify;
use crate::row::{encode_timestamp, get_timestamp, read_author};

const ENTITY: &str = "Product";

/// Wrapper for converting joined rows into domain [`Product`].
struct Wrapper(Product);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let author = read_author(row, "author_")?;

        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let price: i64 = row.try_get("price")?;
        let description: String = row.try_get("description")?;
        let image: String = row.try_get("image")?;

        Ok(Self(Product {
            id: ProductId::new(id),
            name,
            price,
            author_id: author.id,
            description,
            image,
            created_at: get_timestamp(row, "created_at")?,
            updated_at: get_timestamp(row, "updated_at")?,
            author,
        }))
    }
}

// `author_id` is read from `author.id`; the join guarantees it equals
// `product.author_id`.
macro_rules! select_joined {
    () => {
        r"
        SELECT product.id, product.name, product.price, product.description, product.image,
               product.created_at, product.updated_at,
               author.id AS author_id,
               author.name AS author_name,
               author.date_of_birth AS author_date_of_birth,
               author.created_at AS author_created_at,
               author.updated_at AS author_updated_at
        FROM product
        INNER JOIN author ON product.author_id = author.id
        "
    };
}

const SELECT_ALL: &str = select_joined!();
const SELECT_BY_ID: &str = concat!(select_joined!(), "WHERE product.id = ?");

const INSERT: &str = r"
    INSERT INTO product (name, price, author_id, description, image, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const UPDATE: &str = r"
    UPDATE product
    SET name = ?, price = ?, author_id = ?, description = ?, image = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM product WHERE id = ?";

/// `SQLite`-backed product repository.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>, BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Product, BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            row.map(|w| w.0).ok_or_else(|| {
                NotFoundError {
                    entity: ENTITY,
                    id: id.to_string(),
                }
                .into()
            })
        }
    }

    fn store(
        &self,
        product: NewProduct,
    ) -> impl Future<Output = Result<ProductId, BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = encode_timestamp(now());
            let result = sqlx::query(INSERT)
                .bind(&product.name)
                .bind(product.price)
                .bind(product.author_id.as_i64())
                .bind(&product.description)
                .bind(&product.image)
                .bind(&ts)
                .bind(&ts)
                .execute(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            let id = ProductId::new(result.last_insert_rowid());
            tracing::debug!(%id, author_id = %product.author_id, "product stored");
            Ok(id)
        }
    }

    fn update(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> impl Future<Output = Result<(), BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&product.name)
                .bind(product.price)
                .bind(product.author_id.as_i64())
                .bind(&product.description)
                .bind(&product.image)
                .bind(encode_timestamp(now()))
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            tracing::debug!(%id, rows = result.rows_affected(), "product updated");
            Ok(())
        }
    }

    fn delete(&self, id: ProductId) -> impl Future<Output = Result<(), BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            tracing::debug!(%id, rows = result.rows_affected(), "product deleted");
            Ok(())
        }
    }
}
