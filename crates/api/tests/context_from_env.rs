//! `AppContext::from_env` wiring. Kept as the only test in this binary
//! because it mutates process environment and the global subscriber.

use folio_api::context::AppContext;
use folio_api::init_tracing;
use tempfile::TempDir;

#[tokio::test(flavor = "multi_thread")]
async fn from_env_applies_logging_config_and_opens_database() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("env.db");
    std::env::remove_var("RUST_LOG");
    std::env::set_var("FOLIO_DB_PATH", &db_path);
    std::env::set_var("FOLIO_ATTACHMENT_ROOT", temp_dir.path().join("files"));
    std::env::set_var("FOLIO_LOG_LEVEL", "debug");
    std::env::set_var("FOLIO_LOG_JSON", "false");

    let ctx = AppContext::from_env().await.expect("context from env");

    assert_eq!(ctx.config.database.path, db_path);
    assert_eq!(ctx.config.logging.level, "debug");
    assert!(!init_tracing("info", false), "from_env should have installed the subscriber");
    ctx.db.health_check().expect("database should answer");
}
