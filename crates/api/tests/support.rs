#![allow(dead_code)]

use std::path::PathBuf;

use folio_api::context::AppContext;
use folio_domain::constants::IMAGE_BUCKET;
use folio_domain::{AttachmentConfig, Config, DatabaseConfig, ImageUpload, NewUser, User};
use tempfile::TempDir;

pub const PUBLIC_URL: &str = "http://files.folio.test";

/// Fully wired context over a temp database and attachment directory.
pub struct TestApp {
    pub ctx: AppContext,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary test directory");

        let config = Config {
            database: DatabaseConfig { path: temp_dir.path().join("folio.db"), pool_size: 4 },
            attachments: AttachmentConfig {
                root_dir: temp_dir.path().join("files"),
                public_base_url: PUBLIC_URL.to_string(),
                ..AttachmentConfig::default()
            },
            ..Config::default()
        };

        let ctx = AppContext::new(config).await.expect("context should initialise");
        Self { ctx, _temp_dir: temp_dir }
    }

    pub async fn user(&self, name: &str) -> User {
        self.ctx
            .users
            .insert(NewUser::new(format!("{}@folio.test", name.to_lowercase()), name))
            .await
            .expect("user should be inserted")
    }

    /// Filesystem location of a blob issued by the local store.
    pub fn blob_path(&self, url: &str) -> PathBuf {
        let key = url
            .strip_prefix(&format!("{PUBLIC_URL}/{IMAGE_BUCKET}/"))
            .expect("url should come from the local store");
        self.ctx.config.attachments.root_dir.join(IMAGE_BUCKET).join(key)
    }
}

pub fn png(name: &str) -> ImageUpload {
    ImageUpload::new(name, vec![0x89_u8, b'P', b'N', b'G']).with_content_type("image/png")
}
