use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid_column(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| DbError::Decode {
        table,
        message: format!("Invalid UUID in {}.{}: {}", table, column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Audit columns are stored as epoch seconds
#[track_caller]
pub(crate) fn seconds_column(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> DbErrorResult<DateTime<Utc>> {
    let raw: i64 = row.try_get(column)?;
    DateTime::from_timestamp(raw, 0).ok_or_else(|| DbError::Decode {
        table,
        message: format!("Invalid timestamp in {}.{}: {}", table, column, raw),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Client-supplied instants are stored as epoch milliseconds
#[track_caller]
pub(crate) fn millis_column(
    row: &SqliteRow,
    table: &'static str,
    column: &str,
) -> DbErrorResult<DateTime<Utc>> {
    let raw: i64 = row.try_get(column)?;
    DateTime::from_timestamp_millis(raw).ok_or_else(|| DbError::Decode {
        table,
        message: format!("Invalid millisecond timestamp in {}.{}: {}", table, column, raw),
        location: ErrorLocation::from(Location::caller()),
    })
}
