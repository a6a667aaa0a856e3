//! Thumbnail manager
//!
//! Decides between the shared default image and an uploaded one, and keeps
//! blob storage in step with the thumbnail rows. The default image is never
//! deleted; a thumbnail counts as default when its URL equals the configured
//! default URL.

use std::sync::Arc;

use folio_domain::{FolioError, ImageUpload, PortfolioId, Result, Thumbnail};
use tracing::{debug, info, warn};

use super::ports::{AttachmentStore, ThumbnailRepository};

/// Resolves, swaps and discards portfolio thumbnails
#[derive(Clone)]
pub struct ThumbnailManager {
    store: Arc<dyn AttachmentStore>,
    thumbnails: Arc<dyn ThumbnailRepository>,
    default_url: String,
    bucket: String,
}

impl ThumbnailManager {
    pub fn new(
        store: Arc<dyn AttachmentStore>,
        thumbnails: Arc<dyn ThumbnailRepository>,
        default_url: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self { store, thumbnails, default_url: default_url.into(), bucket: bucket.into() }
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    pub fn is_default(&self, image_url: &str) -> bool {
        image_url == self.default_url
    }

    /// URL for a new thumbnail: the uploaded image when one with content is
    /// supplied (exactly one upload), otherwise the default.
    pub async fn resolve(&self, image: Option<&ImageUpload>) -> Result<String> {
        match image {
            Some(image) if !image.is_empty() => {
                let url = self.store.upload(image, &self.bucket).await?;
                debug!(bucket = %self.bucket, file_name = %image.file_name, url = %url, "thumbnail uploaded");
                Ok(url)
            }
            _ => Ok(self.default_url.clone()),
        }
    }

    /// Replace a portfolio's thumbnail and return the new URL.
    ///
    /// The new image is stored first, then the rows are swapped. The old
    /// blob is removed only after the swap committed, and only when it is
    /// not the default image. A failed blob delete at that point is logged
    /// and leaves an orphaned blob; the swap itself stands.
    pub async fn replace(
        &self,
        portfolio_id: PortfolioId,
        image: Option<&ImageUpload>,
    ) -> Result<String> {
        let current = self
            .thumbnails
            .find_by_portfolio(portfolio_id)
            .await?
            .ok_or(FolioError::PortfolioNotFound(portfolio_id))?;

        let new_url = self.resolve(image).await?;

        let replaced = match self.thumbnails.replace(portfolio_id, &new_url).await {
            Ok(thumbnail) => thumbnail,
            Err(err) => {
                self.release_upload(&new_url).await;
                return Err(err);
            }
        };

        if current.image_url != replaced.image_url {
            if let Err(err) = self.discard(&current).await {
                warn!(portfolio_id, url = %current.image_url, error = %err, "failed to delete replaced thumbnail blob");
            }
        }

        info!(portfolio_id, url = %replaced.image_url, "thumbnail replaced");
        Ok(replaced.image_url)
    }

    /// Delete the blob behind a thumbnail that is no longer referenced.
    pub async fn discard(&self, thumbnail: &Thumbnail) -> Result<()> {
        if self.is_default(&thumbnail.image_url) {
            return Ok(());
        }
        self.store.delete(&self.bucket, &thumbnail.image_url).await?;
        debug!(portfolio_id = thumbnail.portfolio_id, url = %thumbnail.image_url, "thumbnail blob deleted");
        Ok(())
    }

    /// Remove a blob uploaded for a write that did not commit.
    pub(crate) async fn release_upload(&self, url: &str) {
        if self.is_default(url) {
            return;
        }
        if let Err(err) = self.store.delete(&self.bucket, url).await {
            warn!(url = %url, error = %err, "failed to remove orphaned upload");
        }
    }
}
