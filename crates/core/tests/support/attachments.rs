//! Recording attachment store for testing

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use folio_core::AttachmentStore;
use folio_domain::{FolioError, ImageUpload, Result as DomainResult};

/// Attachment store that records every call and hands out predictable URLs.
#[derive(Default)]
pub struct RecordingAttachmentStore {
    uploads: Mutex<Vec<(String, String)>>,
    deletes: Mutex<Vec<(String, String)>>,
    fail_uploads: AtomicBool,
    fail_deletes: AtomicBool,
}

impl RecordingAttachmentStore {
    /// Every upload fails with a storage error.
    pub fn failing_uploads() -> Self {
        let store = Self::default();
        store.fail_uploads.store(true, Ordering::SeqCst);
        store
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    /// `(bucket, file_name)` per upload call
    pub fn uploads(&self) -> Vec<(String, String)> {
        self.uploads.lock().unwrap().clone()
    }

    /// `(bucket, url)` per delete call
    pub fn deletes(&self) -> Vec<(String, String)> {
        self.deletes.lock().unwrap().clone()
    }

    pub fn url_for(bucket: &str, file_name: &str) -> String {
        format!("https://blobs.example/{bucket}/{file_name}")
    }
}

#[async_trait]
impl AttachmentStore for RecordingAttachmentStore {
    async fn upload(&self, image: &ImageUpload, bucket: &str) -> DomainResult<String> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(FolioError::Storage("upload rejected".into()));
        }
        self.uploads.lock().unwrap().push((bucket.to_string(), image.file_name.clone()));
        Ok(Self::url_for(bucket, &image.file_name))
    }

    async fn delete(&self, bucket: &str, url: &str) -> DomainResult<()> {
        self.deletes.lock().unwrap().push((bucket.to_string(), url.to_string()));
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(FolioError::Storage("delete rejected".into()));
        }
        Ok(())
    }
}
