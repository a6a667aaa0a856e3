//! Skill repository implementation using SQLite
//!
//! Skill names are unique under `COLLATE NOCASE`, so lookups and
//! find-or-create are case-insensitive.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::SkillRepository;
use folio_domain::{Result as DomainResult, Skill, SkillId};
use rusqlite::{params, Connection, OptionalExtension};
use tokio::task;

use super::manager::DbManager;
use super::{map_join_error, map_sql_error};

/// SQLite-backed implementation of `SkillRepository`
pub struct SqliteSkillRepository {
    db: Arc<DbManager>,
}

impl SqliteSkillRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SqliteSkillRepository {
    async fn find_id_by_name(&self, name: &str) -> DomainResult<Option<SkillId>> {
        let db = Arc::clone(&self.db);
        let name = name.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<SkillId>> {
            let conn = db.get_connection()?;

            conn.query_row("SELECT id FROM skills WHERE name = ?1", params![name], |row| row.get(0))
                .optional()
                .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Get the skill named `name`, inserting it when missing.
///
/// Runs on the caller's connection so portfolio writes can include it in
/// their transaction.
pub(crate) fn find_or_create_skill(conn: &Connection, name: &str) -> rusqlite::Result<Skill> {
    conn.execute("INSERT OR IGNORE INTO skills (name) VALUES (?1)", params![name])?;
    conn.query_row("SELECT id, name FROM skills WHERE name = ?1", params![name], |row| {
        Ok(Skill { id: row.get(0)?, name: row.get(1)? })
    })
}
