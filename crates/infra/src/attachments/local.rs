//! Filesystem attachment store
//!
//! Writes blobs under `root/<bucket>/<key>`; a web server is expected to
//! serve `root` at the public base URL.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::AttachmentStore;
use folio_domain::{ImageUpload, Result};
use tokio::fs;
use tracing::{debug, warn};

use super::{key_from_url, object_key, validate_bucket};
use crate::errors::InfraError;

pub struct LocalAttachmentStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalAttachmentStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self { root: root.into(), public_base_url: public_base_url.trim_end_matches('/').to_string() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path a URL issued by this store points at.
    pub fn path_for_url(&self, bucket: &str, url: &str) -> Result<PathBuf> {
        validate_bucket(bucket)?;
        let key = key_from_url(&self.public_base_url, bucket, url)?;
        Ok(self.root.join(bucket).join(key))
    }
}

#[async_trait]
impl AttachmentStore for LocalAttachmentStore {
    async fn upload(&self, image: &ImageUpload, bucket: &str) -> Result<String> {
        validate_bucket(bucket)?;
        let key = object_key(&image.file_name);
        let dir = self.root.join(bucket);

        fs::create_dir_all(&dir).await.map_err(|e| {
            warn!(dir = %dir.display(), error = %e, "attachment directory creation failed");
            InfraError::from(e)
        })?;

        let path = dir.join(&key);
        fs::write(&path, &image.bytes).await.map_err(|e| {
            warn!(path = %path.display(), error = %e, "attachment write failed");
            InfraError::from(e)
        })?;

        debug!(path = %path.display(), bytes = image.bytes.len(), "attachment stored");
        Ok(format!("{}/{bucket}/{key}", self.public_base_url))
    }

    async fn delete(&self, bucket: &str, url: &str) -> Result<()> {
        let path = self.path_for_url(bucket, url)?;

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "attachment deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "attachment already absent");
                Ok(())
            }
            Err(e) => Err(InfraError::from(e).into()),
        }
    }
}
