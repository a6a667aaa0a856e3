//! Port interfaces for attachment storage
//!
//! The blob store and the thumbnail table are separate collaborators: blobs
//! live outside the database and are not covered by its transactions.

use async_trait::async_trait;
use folio_domain::{ContentImage, ImageUpload, PortfolioId, Result, Thumbnail};

/// External blob store for uploaded images
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Store an image in `bucket` and return its public URL
    async fn upload(&self, image: &ImageUpload, bucket: &str) -> Result<String>;

    /// Remove the blob previously returned for `url`
    async fn delete(&self, bucket: &str, url: &str) -> Result<()>;
}

/// Trait for thumbnail row persistence
#[async_trait]
pub trait ThumbnailRepository: Send + Sync {
    /// Get the thumbnail bound to a portfolio
    async fn find_by_portfolio(&self, portfolio_id: PortfolioId) -> Result<Option<Thumbnail>>;

    /// Swap the portfolio's thumbnail row for one pointing at `image_url`.
    ///
    /// Removing the old row and inserting the new one happen atomically.
    async fn replace(&self, portfolio_id: PortfolioId, image_url: &str) -> Result<Thumbnail>;
}

/// Trait for the record of uploaded content images
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Record an uploaded image URL
    async fn insert(&self, image_url: &str) -> Result<ContentImage>;

    /// Forget an image URL; false when it was not recorded
    async fn delete_by_url(&self, image_url: &str) -> Result<bool>;

    /// Every recorded image, newest first
    async fn list(&self) -> Result<Vec<ContentImage>>;
}
