//! Attachment store implementations
//!
//! Both stores address blobs as `<bucket>/<key>` and hand out
//! `<public_base_url>/<bucket>/<key>` URLs. Deletes map a URL back to its
//! key and reject URLs the store did not issue.

pub mod http;
pub mod local;

use std::sync::Arc;

use folio_core::AttachmentStore;
use folio_domain::{AttachmentBackend, AttachmentConfig, FolioError, Result};
use uuid::Uuid;

pub use http::HttpAttachmentStore;
pub use local::LocalAttachmentStore;

const MAX_FILE_NAME_LEN: usize = 100;

/// Build the store selected by configuration.
pub fn build_attachment_store(config: &AttachmentConfig) -> Result<Arc<dyn AttachmentStore>> {
    match config.backend {
        AttachmentBackend::Local => Ok(Arc::new(LocalAttachmentStore::new(
            config.root_dir.clone(),
            &config.public_base_url,
        ))),
        AttachmentBackend::Http => {
            let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                FolioError::Config("attachments.endpoint is required for the http backend".into())
            })?;
            Ok(Arc::new(HttpAttachmentStore::new(endpoint, Some(&config.public_base_url))?))
        }
    }
}

/// Unique object key that keeps a readable, path-safe form of the file name.
pub(crate) fn object_key(file_name: &str) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .take(MAX_FILE_NAME_LEN)
        .collect();
    let mut squeezed = String::with_capacity(sanitized.len());
    for c in sanitized.chars() {
        if c == '.' && squeezed.ends_with('.') {
            continue;
        }
        squeezed.push(c);
    }
    let sanitized = squeezed.trim_matches('.');
    let name = if sanitized.is_empty() { "image" } else { sanitized };
    format!("{}-{name}", Uuid::new_v4())
}

pub(crate) fn validate_bucket(bucket: &str) -> Result<()> {
    if bucket.is_empty() || bucket.contains('/') || bucket.contains("..") {
        return Err(FolioError::Storage(format!("invalid bucket name '{bucket}'")));
    }
    Ok(())
}

/// A single path segment that is neither empty nor a dot segment.
fn is_object_key(key: &str) -> bool {
    !key.is_empty() && !key.contains('/') && !key.contains('\\') && key != "." && key != ".."
}

/// Key for a URL issued under `base_url/bucket/`.
pub(crate) fn key_from_url<'a>(base_url: &str, bucket: &str, url: &'a str) -> Result<&'a str> {
    let key = url
        .strip_prefix(base_url)
        .and_then(|rest| rest.strip_prefix('/'))
        .and_then(|rest| rest.strip_prefix(bucket))
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|key| is_object_key(key))
        .ok_or_else(|| {
            FolioError::Storage(format!("url '{url}' is not an object in bucket '{bucket}'"))
        })?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_sanitizes_file_name() {
        let key = object_key("../my photo (1).png");
        assert!(key.ends_with("-_my_photo__1_.png"), "unexpected key {key}");
        assert!(!key.contains('/'));
    }

    #[test]
    fn object_key_squeezes_dot_runs() {
        let key = object_key("shot..final...png");
        assert!(key.ends_with("-shot.final.png"), "unexpected key {key}");
    }

    #[test]
    fn key_from_url_accepts_keys_with_inner_dots() {
        let base = "http://cdn.example/files";
        let url = "http://cdn.example/files/images/abc-shot..final.png";
        assert_eq!(key_from_url(base, "images", url).unwrap(), "abc-shot..final.png");
        assert!(key_from_url(base, "images", "http://cdn.example/files/images/..").is_err());
        assert!(key_from_url(base, "images", "http://cdn.example/files/images/.").is_err());
    }

    #[test]
    fn object_key_falls_back_for_empty_names() {
        assert!(object_key("").ends_with("-image"));
        assert!(object_key("...").ends_with("-image"));
    }

    #[test]
    fn key_from_url_requires_matching_bucket() {
        let base = "http://cdn.example/files";
        assert_eq!(key_from_url(base, "images", "http://cdn.example/files/images/a.png").unwrap(), "a.png");
        assert!(key_from_url(base, "images", "http://cdn.example/files/other/a.png").is_err());
        assert!(key_from_url(base, "images", "http://evil.example/files/images/a.png").is_err());
        assert!(key_from_url(base, "images", "http://cdn.example/files/images/../x").is_err());
    }

    #[test]
    fn bucket_names_cannot_escape() {
        assert!(validate_bucket("images").is_ok());
        assert!(validate_bucket("../etc").is_err());
        assert!(validate_bucket("").is_err());
    }
}
