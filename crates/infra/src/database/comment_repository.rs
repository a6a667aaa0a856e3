//! User comment repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use folio_core::CommentRepository;
use folio_domain::{
    CommentId, CommentStatus, CommentView, NewComment, Page, PageRequest, Result as DomainResult,
    UserComment, UserId,
};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::task;

use super::manager::DbManager;
use super::{map_join_error, map_sql_error, timestamp_at, to_millis, to_sql_int};

const COMMENT_COLUMNS: &str =
    "c.id, c.recipient_id, c.writer_id, c.content, c.status, c.created_at, c.updated_at";

/// Which side of a comment a listing is keyed on
#[derive(Clone, Copy)]
enum CommentParty {
    Recipient,
    Writer,
}

impl CommentParty {
    const fn column(self) -> &'static str {
        match self {
            Self::Recipient => "c.recipient_id",
            Self::Writer => "c.writer_id",
        }
    }
}

/// SQLite-backed implementation of `CommentRepository`
pub struct SqliteCommentRepository {
    db: Arc<DbManager>,
}

impl SqliteCommentRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    async fn find_page(
        &self,
        party: CommentParty,
        user_id: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<CommentView>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Page<CommentView>> {
            let conn = db.get_connection()?;
            let column = party.column();

            let total: i64 = conn
                .query_row(
                    &format!("SELECT COUNT(*) FROM user_comments c WHERE {column} = ?1"),
                    params![user_id],
                    |row| row.get(0),
                )
                .map_err(map_sql_error)?;

            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {COMMENT_COLUMNS}, w.name, w.profile_img
                     FROM user_comments c
                     JOIN users w ON w.id = c.writer_id
                     WHERE {column} = ?1
                     ORDER BY c.created_at DESC, c.id DESC
                     LIMIT ?2 OFFSET ?3"
                ))
                .map_err(map_sql_error)?;

            let content = stmt
                .query_map(
                    params![user_id, i64::from(page.size), to_sql_int(page.offset())],
                    |row| {
                        let comment = map_comment_row(row)?;
                        Ok(CommentView::new(comment, row.get(7)?, row.get(8)?))
                    },
                )
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;

            Ok(Page::new(content, page, u64::try_from(total).unwrap_or_default()))
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<UserComment>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<UserComment>> {
            let conn = db.get_connection()?;
            select_comment(&conn, id).optional().map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<UserComment> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<UserComment> {
            let conn = db.get_connection()?;
            let now = to_millis(Utc::now());

            conn.execute(
                "INSERT INTO user_comments (recipient_id, writer_id, content, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
                params![
                    comment.recipient_id,
                    comment.writer_id,
                    comment.content,
                    comment.status.as_str(),
                    now
                ],
            )
            .map_err(map_sql_error)?;

            select_comment(&conn, conn.last_insert_rowid()).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update_content(
        &self,
        id: CommentId,
        content: &str,
    ) -> DomainResult<Option<UserComment>> {
        let db = Arc::clone(&self.db);
        let content = content.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<UserComment>> {
            let conn = db.get_connection()?;

            let changed = conn
                .execute(
                    "UPDATE user_comments SET content = ?1, updated_at = ?2 WHERE id = ?3",
                    params![content, to_millis(Utc::now()), id],
                )
                .map_err(map_sql_error)?;
            if changed == 0 {
                return Ok(None);
            }

            select_comment(&conn, id).map(Some).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let removed = conn
                .execute("DELETE FROM user_comments WHERE id = ?1", params![id])
                .map_err(map_sql_error)?;
            Ok(removed > 0)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_recipient(
        &self,
        recipient_id: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<CommentView>> {
        self.find_page(CommentParty::Recipient, recipient_id, page).await
    }

    async fn find_by_writer(
        &self,
        writer_id: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<CommentView>> {
        self.find_page(CommentParty::Writer, writer_id, page).await
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn select_comment(conn: &Connection, id: CommentId) -> rusqlite::Result<UserComment> {
    conn.query_row(
        &format!("SELECT {COMMENT_COLUMNS} FROM user_comments c WHERE c.id = ?1"),
        params![id],
        map_comment_row,
    )
}

fn map_comment_row(row: &Row<'_>) -> rusqlite::Result<UserComment> {
    let status: String = row.get(4)?;
    let status = status.parse::<CommentStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.to_string().into())
    })?;

    Ok(UserComment {
        id: row.get(0)?,
        recipient_id: row.get(1)?,
        writer_id: row.get(2)?,
        content: row.get(3)?,
        status,
        created_at: timestamp_at(row, 5)?,
        updated_at: timestamp_at(row, 6)?,
    })
}
