//! S3-compatible HTTP attachment store
//!
//! Objects are written with `PUT <endpoint>/<bucket>/<key>` and removed
//! with `DELETE` on the same path. Non-success responses surface as
//! storage errors.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::AttachmentStore;
use folio_domain::{FolioError, ImageUpload, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::{key_from_url, object_key, validate_bucket};
use crate::errors::InfraError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub struct HttpAttachmentStore {
    client: Client,
    endpoint: String,
    public_base_url: String,
}

impl HttpAttachmentStore {
    /// Create a store for `endpoint`. Issued URLs use `public_base_url`
    /// when given (e.g. a CDN in front of the bucket), else the endpoint.
    pub fn new(endpoint: &str, public_base_url: Option<&str>) -> Result<Self> {
        let parsed = Url::parse(endpoint)
            .map_err(|e| FolioError::Config(format!("invalid attachment endpoint '{endpoint}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FolioError::Config(format!(
                "attachment endpoint must be http(s), got '{}'",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FolioError::Config(format!("failed to build HTTP client: {e}")))?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        let public_base_url = public_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| endpoint.clone());

        Ok(Self { client, endpoint, public_base_url })
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{bucket}/{key}", self.endpoint)
    }
}

#[async_trait]
impl AttachmentStore for HttpAttachmentStore {
    async fn upload(&self, image: &ImageUpload, bucket: &str) -> Result<String> {
        validate_bucket(bucket)?;
        let key = object_key(&image.file_name);
        let target = self.object_url(bucket, &key);

        self.client
            .put(&target)
            .header(CONTENT_TYPE, image.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE))
            .body(image.bytes.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                warn!(url = %target, error = %e, "object upload failed");
                InfraError::from(e)
            })?;

        debug!(url = %target, bytes = image.bytes.len(), "object uploaded");
        Ok(format!("{}/{bucket}/{key}", self.public_base_url))
    }

    async fn delete(&self, bucket: &str, url: &str) -> Result<()> {
        validate_bucket(bucket)?;
        let key = key_from_url(&self.public_base_url, bucket, url)?;
        let target = self.object_url(bucket, key);

        let response = self.client.delete(&target).send().await.map_err(InfraError::from)?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(url = %target, "object already absent");
            return Ok(());
        }
        response.error_for_status().map_err(|e| {
            warn!(url = %target, error = %e, "object delete failed");
            InfraError::from(e)
        })?;

        debug!(url = %target, "object deleted");
        Ok(())
    }
}
