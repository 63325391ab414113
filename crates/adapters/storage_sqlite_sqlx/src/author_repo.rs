//! `SQLite` implementation of [`AuthorRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use bookhub_app::ports::AuthorRepository;
use bookhub_domain::author::{Author, NewAuthor};
use bookhub_domain::error::{BookHubError, NotFoundError};
use bookhub_domain::id::AuthorId;
use bookhub_domain::time::{self, now};

use crate::error::classify;
use crate::row::{encode_timestamp, read_author};

const ENTITY: &str = "Author";

/// Wrapper for converting database rows into domain [`Author`].
struct Wrapper(Author);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        read_author(row, "").map(Self)
    }
}

const INSERT: &str =
    "INSERT INTO author (name, date_of_birth, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM author WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM author";
const UPDATE: &str = "UPDATE author SET name = ?, date_of_birth = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM author WHERE id = ?";

/// `SQLite`-backed author repository.
pub struct SqliteAuthorRepository {
    pool: SqlitePool,
}

impl SqliteAuthorRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AuthorRepository for SqliteAuthorRepository {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Author>, BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(&self, id: AuthorId) -> impl Future<Output = Result<Author, BookHubError>> + Send {
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
        author: NewAuthor,
    ) -> impl Future<Output = Result<AuthorId, BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let ts = encode_timestamp(now());
            let result = sqlx::query(INSERT)
                .bind(&author.name)
                .bind(time::format_date(author.date_of_birth))
                .bind(&ts)
                .bind(&ts)
                .execute(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            let id = AuthorId::new(result.last_insert_rowid());
            tracing::debug!(%id, "author stored");
            Ok(id)
        }
    }

    fn update(
        &self,
        id: AuthorId,
        author: NewAuthor,
    ) -> impl Future<Output = Result<(), BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&author.name)
                .bind(time::format_date(author.date_of_birth))
                .bind(encode_timestamp(now()))
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            tracing::debug!(%id, rows = result.rows_affected(), "author updated");
            Ok(())
        }
    }

    fn delete(&self, id: AuthorId) -> impl Future<Output = Result<(), BookHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(|err| classify(ENTITY, err))?;

            tracing::debug!(%id, rows = result.rows_affected(), "author deleted");
            Ok(())
        }
    }
}
