//! Thumbnail repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::ThumbnailRepository;
use folio_domain::{FolioError, PortfolioId, Result as DomainResult, Thumbnail};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::task;

use super::manager::DbManager;
use super::{map_join_error, map_sql_error};

/// SQLite-backed implementation of `ThumbnailRepository`
pub struct SqliteThumbnailRepository {
    db: Arc<DbManager>,
}

impl SqliteThumbnailRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ThumbnailRepository for SqliteThumbnailRepository {
    async fn find_by_portfolio(&self, portfolio_id: PortfolioId) -> DomainResult<Option<Thumbnail>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Thumbnail>> {
            let conn = db.get_connection()?;
            select_thumbnail(&conn, portfolio_id).optional().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn replace(&self, portfolio_id: PortfolioId, image_url: &str) -> DomainResult<Thumbnail> {
        let db = Arc::clone(&self.db);
        let image_url = image_url.to_string();

        task::spawn_blocking(move || -> DomainResult<Thumbnail> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;

            let removed = tx
                .execute("DELETE FROM thumbnails WHERE portfolio_id = ?1", params![portfolio_id])
                .map_err(map_sql_error)?;
            if removed == 0 {
                return Err(FolioError::PortfolioNotFound(portfolio_id));
            }

            insert_thumbnail(&tx, portfolio_id, &image_url).map_err(map_sql_error)?;
            let thumbnail = select_thumbnail(&tx, portfolio_id).map_err(map_sql_error)?;

            tx.commit().map_err(map_sql_error)?;
            Ok(thumbnail)
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

pub(crate) fn insert_thumbnail(
    conn: &Connection,
    portfolio_id: PortfolioId,
    image_url: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO thumbnails (portfolio_id, image_url) VALUES (?1, ?2)",
        params![portfolio_id, image_url],
    )?;
    Ok(())
}

pub(crate) fn select_thumbnail(
    conn: &Connection,
    portfolio_id: PortfolioId,
) -> rusqlite::Result<Thumbnail> {
    conn.query_row(
        "SELECT id, portfolio_id, image_url FROM thumbnails WHERE portfolio_id = ?1",
        params![portfolio_id],
        map_thumbnail_row,
    )
}

fn map_thumbnail_row(row: &Row<'_>) -> rusqlite::Result<Thumbnail> {
    Ok(Thumbnail { id: row.get(0)?, portfolio_id: row.get(1)?, image_url: row.get(2)? })
}
