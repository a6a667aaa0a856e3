//! Content image library
//!
//! Images embedded in portfolio content are uploaded on their own, ahead of
//! the portfolio that references them. Every stored blob is recorded so it
//! can be listed and removed later.

use std::sync::Arc;

use folio_domain::{FolioError, ImageUpload, Result};
use tracing::{debug, info, warn};

use super::ports::{AttachmentStore, ImageRepository};

/// Uploads, lists and deletes content images in the image bucket
#[derive(Clone)]
pub struct ContentImageLibrary {
    store: Arc<dyn AttachmentStore>,
    images: Arc<dyn ImageRepository>,
    default_url: String,
    bucket: String,
}

impl ContentImageLibrary {
    pub fn new(
        store: Arc<dyn AttachmentStore>,
        images: Arc<dyn ImageRepository>,
        default_url: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self { store, images, default_url: default_url.into(), bucket: bucket.into() }
    }

    /// Store every non-empty image and return the URLs in input order.
    ///
    /// All or nothing: if any upload or record fails, blobs and records
    /// created by this call are removed before the error is returned.
    pub async fn upload_images(&self, images: &[ImageUpload]) -> Result<Vec<String>> {
        let mut urls = Vec::with_capacity(images.len());

        for image in images.iter().filter(|image| !image.is_empty()) {
            match self.store_one(image).await {
                Ok(url) => urls.push(url),
                Err(err) => {
                    self.roll_back(&urls).await;
                    return Err(err);
                }
            }
        }

        info!(count = urls.len(), "content images uploaded");
        Ok(urls)
    }

    /// Delete a content image blob and its record.
    ///
    /// The shared default image cannot be deleted. The blob goes first so a
    /// failed delete keeps the record and can be retried.
    pub async fn delete_image(&self, image_url: &str) -> Result<()> {
        let image_url = image_url.trim();
        if image_url.is_empty() {
            return Err(FolioError::InvalidArgument("image url is required".into()));
        }
        if image_url == self.default_url {
            return Err(FolioError::InvalidArgument("the default image cannot be deleted".into()));
        }

        self.store.delete(&self.bucket, image_url).await?;
        let recorded = self.images.delete_by_url(image_url).await?;

        info!(url = %image_url, recorded, "content image deleted");
        Ok(())
    }

    /// URLs of every recorded image, newest first.
    pub async fn list_images(&self) -> Result<Vec<String>> {
        let images = self.images.list().await?;
        Ok(images.into_iter().map(|image| image.image_url).collect())
    }

    async fn store_one(&self, image: &ImageUpload) -> Result<String> {
        let url = self.store.upload(image, &self.bucket).await?;
        if let Err(err) = self.images.insert(&url).await {
            self.release_blob(&url).await;
            return Err(err);
        }
        debug!(file_name = %image.file_name, url = %url, "content image stored");
        Ok(url)
    }

    async fn roll_back(&self, urls: &[String]) {
        for url in urls {
            if let Err(err) = self.images.delete_by_url(url).await {
                warn!(url = %url, error = %err, "failed to drop content image record");
            }
            self.release_blob(url).await;
        }
    }

    async fn release_blob(&self, url: &str) {
        if let Err(err) = self.store.delete(&self.bucket, url).await {
            warn!(url = %url, error = %err, "failed to remove orphaned content image");
        }
    }
}
