//! Shared fixtures for infra integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use folio_domain::{NewUser, User};
use folio_infra::database::{DbManager, SqliteUserRepository};
use tempfile::TempDir;

/// Temporary migrated database that lives as long as the wrapper.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("folio-test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Register a user named `name` with a derived email address.
    pub async fn seed_user(&self, name: &str) -> User {
        let users = SqliteUserRepository::new(Arc::clone(&self.manager));
        let mut account = NewUser::new(format!("{}@folio.test", name.to_lowercase()), name);
        account.profile_img = Some(format!("https://img.folio.test/{name}.png"));
        users.insert(account).await.expect("user should be inserted")
    }

    /// Count rows of `table`.
    pub fn count_rows(&self, table: &str) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .expect("count query should succeed")
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}
