//! Content image repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use folio_core::ImageRepository;
use folio_domain::{ContentImage, Result as DomainResult};
use rusqlite::{params, Row};
use tokio::task;
use tracing::debug;

use super::manager::DbManager;
use super::{map_join_error, map_sql_error, timestamp_at, to_millis};

/// SQLite-backed implementation of `ImageRepository`
pub struct SqliteImageRepository {
    db: Arc<DbManager>,
}

impl SqliteImageRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ImageRepository for SqliteImageRepository {
    async fn insert(&self, image_url: &str) -> DomainResult<ContentImage> {
        let db = Arc::clone(&self.db);
        let image_url = image_url.to_string();

        task::spawn_blocking(move || -> DomainResult<ContentImage> {
            let conn = db.get_connection()?;
            let image = conn
                .query_row(
                    "INSERT INTO content_images (image_url, created_at) VALUES (?1, ?2)
                     RETURNING id, image_url, created_at",
                    params![image_url, to_millis(Utc::now())],
                    map_image_row,
                )
                .map_err(map_sql_error)?;
            debug!(image_id = image.id, "content image recorded");
            Ok(image)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_by_url(&self, image_url: &str) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);
        let image_url = image_url.to_string();

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let removed = conn
                .execute("DELETE FROM content_images WHERE image_url = ?1", params![image_url])
                .map_err(map_sql_error)?;
            Ok(removed > 0)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self) -> DomainResult<Vec<ContentImage>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<ContentImage>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(
                    "SELECT id, image_url, created_at FROM content_images
                     ORDER BY created_at DESC, id DESC",
                )
                .map_err(map_sql_error)?;
            let images = stmt
                .query_map([], map_image_row)
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;
            Ok(images)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_image_row(row: &Row<'_>) -> rusqlite::Result<ContentImage> {
    Ok(ContentImage { id: row.get(0)?, image_url: row.get(1)?, created_at: timestamp_at(row, 2)? })
}
