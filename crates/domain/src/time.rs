//! Time and date helpers.

use chrono::{DateTime, NaiveDate, ParseError, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Calendar date layout used for `date_of_birth`, both on the wire and at rest.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns a [`ParseError`] when `value` does not follow [`DATE_FORMAT`].
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}
