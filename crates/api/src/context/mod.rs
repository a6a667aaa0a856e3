//! Application context - dependency injection container

use std::sync::Arc;

use folio_core::{
    AccessGuard, AttachmentStore, CommentService, ContentImageLibrary, PortfolioCatalog,
    SkillResolver, ThumbnailManager,
};
use folio_domain::{AttachmentBackend, Config, FolioError, Result};
use folio_infra::{
    build_attachment_store, config, DbManager, SqliteCommentRepository, SqliteImageRepository,
    SqlitePortfolioRepository, SqliteSkillRepository, SqliteThumbnailRepository,
    SqliteUserRepository,
};
use tracing::{info, warn};

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    /// Concrete repository so accounts can be seeded; the services only
    /// see the `UserRepository` port.
    pub users: Arc<SqliteUserRepository>,
    pub attachments: Arc<dyn AttachmentStore>,
    pub portfolios: Arc<PortfolioCatalog>,
    pub comments: Arc<CommentService>,
    pub images: Arc<ContentImageLibrary>,
}

impl AppContext {
    /// Wire repositories, the attachment store and services for `config`.
    ///
    /// Opens (or creates) the database and applies the schema.
    pub async fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let attachments = build_attachment_store(&config.attachments)?;

        let users = Arc::new(SqliteUserRepository::new(Arc::clone(&db)));
        let guard = AccessGuard::new(users.clone());

        let thumbnails = ThumbnailManager::new(
            Arc::clone(&attachments),
            Arc::new(SqliteThumbnailRepository::new(Arc::clone(&db))),
            config.attachments.default_thumbnail_url.clone(),
            config.attachments.bucket.clone(),
        );
        let skills = SkillResolver::new(Arc::new(SqliteSkillRepository::new(Arc::clone(&db))));

        let portfolios = Arc::new(PortfolioCatalog::new(
            Arc::new(SqlitePortfolioRepository::new(Arc::clone(&db))),
            guard.clone(),
            thumbnails,
            skills,
        ));
        let comments = Arc::new(CommentService::new(
            Arc::new(SqliteCommentRepository::new(Arc::clone(&db))),
            guard,
        ));
        let images = Arc::new(ContentImageLibrary::new(
            Arc::clone(&attachments),
            Arc::new(SqliteImageRepository::new(Arc::clone(&db))),
            config.attachments.default_thumbnail_url.clone(),
            config.attachments.bucket.clone(),
        ));

        info!(
            db_path = %config.database.path.display(),
            backend = ?config.attachments.backend,
            "application context ready"
        );

        Ok(Self { config, db, users, attachments, portfolios, comments, images })
    }

    /// Load `.env`, then configuration (environment first, files second),
    /// install tracing from `config.logging` and build the context.
    ///
    /// An already installed subscriber is left in place.
    pub async fn from_env() -> Result<Self> {
        let dotenv = dotenvy::dotenv();
        let config = config::load()?;
        crate::init_tracing(&config.logging.level, config.logging.json);

        match dotenv {
            Ok(path) => info!(path = %path.display(), "loaded .env file"),
            Err(err) if err.not_found() => {}
            Err(err) => warn!(error = %err, "ignoring unreadable .env file"),
        }

        Self::new(config).await
    }

    /// Check health of all application components
    ///
    /// The app counts as healthy when at least 80% of components are.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new()
            .add_component(self.check_database_health().await)
            .add_component(self.check_attachment_health().await)
            // Stateless services, healthy whenever the context exists.
            .add_component(ComponentHealth::healthy("portfolio_catalog"))
            .add_component(ComponentHealth::healthy("comment_service"));

        status.calculate_score();
        status
    }

    async fn check_database_health(&self) -> ComponentHealth {
        let db = Arc::clone(&self.db);
        match tokio::task::spawn_blocking(move || db.health_check()).await {
            Ok(Ok(stats)) => ComponentHealth::healthy("database").with_message(format!(
                "{}/{} connections open, {} idle, avg acquire {}ms, {} timeouts",
                stats.connections,
                stats.max_size,
                stats.idle_connections,
                stats.avg_acquire_ms,
                stats.timeouts
            )),
            Ok(Err(e)) => {
                warn!(error = %e, "database health check failed");
                ComponentHealth::unhealthy("database", format!("query failed: {e}"))
            }
            Err(e) => {
                tracing::error!(error = %e, "database health check task panicked");
                ComponentHealth::unhealthy("database", format!("task panic: {e}"))
            }
        }
    }

    /// The local backend needs its root directory; the HTTP backend is not
    /// probed.
    async fn check_attachment_health(&self) -> ComponentHealth {
        let attachments = &self.config.attachments;
        if attachments.backend != AttachmentBackend::Local {
            return ComponentHealth::healthy("attachments");
        }

        let probe = tokio::fs::create_dir_all(attachments.root_dir.join(&attachments.bucket))
            .await
            .map_err(|e| FolioError::Storage(e.to_string()));
        match probe {
            Ok(()) => ComponentHealth::healthy("attachments"),
            Err(e) => {
                warn!(root = %attachments.root_dir.display(), error = %e, "attachment root unusable");
                ComponentHealth::unhealthy("attachments", e.to_string())
            }
        }
    }
}
