//! Column codecs shared by the repositories.
//!
//! Timestamps are stored as RFC 3339 text and dates as `YYYY-MM-DD`.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use bookhub_domain::author::Author;
use bookhub_domain::id::AuthorId;
use bookhub_domain::time::{self, Timestamp};

pub(crate) fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339()
}

fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Read a timestamp column by name.
pub(crate) fn get_timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    decode_timestamp(&raw)
}

/// Read the author columns of `row`, each name prefixed by `prefix`.
///
/// Plain author queries pass `""`; the product join aliases the author
/// columns as `author_*`.
pub(crate) fn read_author(row: &SqliteRow, prefix: &str) -> Result<Author, sqlx::Error> {
    let column = |name: &str| format!("{prefix}{name}");

    let id: i64 = row.try_get(column("id").as_str())?;
    let name: String = row.try_get(column("name").as_str())?;
    let date_of_birth: String = row.try_get(column("date_of_birth").as_str())?;

    let date_of_birth =
        time::parse_date(&date_of_birth).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

    Ok(Author {
        id: AuthorId::new(id),
        name,
        date_of_birth,
        created_at: get_timestamp(row, &column("created_at"))?,
        updated_at: get_timestamp(row, &column("updated_at"))?,
    })
}
