//! User repository implementation using SQLite
//!
//! The services only read users; `insert` exists for account seeding.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use folio_core::UserRepository;
use folio_domain::{NewUser, Result as DomainResult, User, UserId};
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;
use tracing::info;

use super::manager::DbManager;
use super::{map_join_error, map_sql_error, timestamp_at, to_millis};

const USER_COLUMNS: &str = "id, email, name, profile_img, git_link, blog_link, about, created_at";

/// SQLite-backed implementation of `UserRepository`
pub struct SqliteUserRepository {
    db: Arc<DbManager>,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Register an account
    pub async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<User> {
            let conn = db.get_connection()?;
            let now = Utc::now();

            conn.execute(
                "INSERT INTO users (email, name, profile_img, git_link, blog_link, about, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    user.email,
                    user.name,
                    user.profile_img,
                    user.git_link,
                    user.blog_link,
                    user.about,
                    to_millis(now)
                ],
            )
            .map_err(map_sql_error)?;

            let id = conn.last_insert_rowid();
            let created = conn
                .query_row(
                    &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                    params![id],
                    map_user_row,
                )
                .map_err(map_sql_error)?;

            info!(user_id = id, "user registered");
            Ok(created)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<User>> {
            let conn = db.get_connection()?;

            conn.query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![id],
                map_user_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn map_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        profile_img: row.get(3)?,
        git_link: row.get(4)?,
        blog_link: row.get(5)?,
        about: row.get(6)?,
        created_at: timestamp_at(row, 7)?,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use folio_domain::FolioError;
    use tempfile::TempDir;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let manager = DbManager::new(temp_dir.path().join("test.db"), 2).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        (Arc::new(manager), temp_dir)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn insert_then_find_round_trips_profile_fields() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteUserRepository::new(db);

        let mut input = NewUser::new("dev@example.com", "dev");
        input.blog_link = Some("https://blog.example".into());
        let created = repo.insert(input).await.expect("insert user");

        let found = repo.find_by_id(created.id).await.expect("query user").expect("user exists");
        assert_eq!(found, created);
        assert_eq!(found.blog_link.as_deref(), Some("https://blog.example"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_user_is_none() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteUserRepository::new(db);

        assert!(repo.find_by_id(42).await.expect("query user").is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn duplicate_email_is_rejected() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteUserRepository::new(db);

        repo.insert(NewUser::new("dup@example.com", "one")).await.expect("first insert");
        let err = repo.insert(NewUser::new("dup@example.com", "two")).await.unwrap_err();

        assert!(matches!(err, FolioError::Database(msg) if msg.contains("unique")));
    }
}
