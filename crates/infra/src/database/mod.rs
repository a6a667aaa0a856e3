//! Database implementations

pub mod comment_repository;
pub mod image_repository;
pub mod manager;
pub mod portfolio_repository;
pub mod skill_repository;
pub mod thumbnail_repository;
pub mod user_repository;

pub use comment_repository::*;
pub use image_repository::*;
pub use manager::*;
pub use portfolio_repository::*;
pub use skill_repository::*;
pub use thumbnail_repository::*;
pub use user_repository::*;

use chrono::{DateTime, Utc};
use folio_domain::FolioError;
use rusqlite::types::Type;
use rusqlite::Row;
use tokio::task::JoinError;

use crate::errors::InfraError;

// =============================================================================
// Shared Helpers
// =============================================================================

fn map_sql_error(err: rusqlite::Error) -> FolioError {
    InfraError::from(err).into()
}

fn map_join_error(err: JoinError) -> FolioError {
    InfraError::from(err).into()
}

/// Timestamps are stored as Unix milliseconds.
fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            format!("timestamp {millis} out of range").into(),
        )
    })
}

/// SQLite stores `LIMIT`/`OFFSET` as signed integers.
fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
