//! Shared test helpers for `folio-core` integration tests.
//!
//! In-memory port implementations and fixtures so service tests can focus
//! on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod attachments;
pub mod repositories;

use std::sync::Arc;

use folio_core::{
    AccessGuard, CommentService, ContentImageLibrary, PortfolioCatalog, SkillResolver,
    ThumbnailManager,
};
use folio_domain::constants::{DEFAULT_THUMBNAIL_URL, IMAGE_BUCKET};
use folio_domain::{ImageUpload, NewPortfolio, UserId};

pub use attachments::RecordingAttachmentStore;
pub use repositories::InMemoryRepositories;

/// Services wired against in-memory ports.
pub struct Harness {
    pub repos: Arc<InMemoryRepositories>,
    pub store: Arc<RecordingAttachmentStore>,
    pub catalog: PortfolioCatalog,
    pub comments: CommentService,
    pub thumbnails: ThumbnailManager,
    pub skills: SkillResolver,
    pub images: ContentImageLibrary,
}

impl Harness {
    pub fn new(repos: InMemoryRepositories) -> Self {
        Self::with_store(repos, RecordingAttachmentStore::default())
    }

    pub fn with_store(repos: InMemoryRepositories, store: RecordingAttachmentStore) -> Self {
        let repos = Arc::new(repos);
        let store = Arc::new(store);
        let guard = AccessGuard::new(repos.clone());
        let thumbnails =
            ThumbnailManager::new(store.clone(), repos.clone(), DEFAULT_THUMBNAIL_URL, IMAGE_BUCKET);
        let skills = SkillResolver::new(repos.clone());
        let catalog =
            PortfolioCatalog::new(repos.clone(), guard.clone(), thumbnails.clone(), skills.clone());
        let comments = CommentService::new(repos.clone(), guard);
        let images =
            ContentImageLibrary::new(store.clone(), repos.clone(), DEFAULT_THUMBNAIL_URL, IMAGE_BUCKET);
        Self { repos, store, catalog, comments, thumbnails, skills, images }
    }
}

pub fn new_portfolio(owner_id: UserId, title: &str) -> NewPortfolio {
    NewPortfolio {
        owner_id: Some(owner_id),
        title: title.to_string(),
        description: Some(format!("{title} description")),
        content: Some(format!("{title} content")),
        git_link: Some(format!("https://git.example/{owner_id}")),
        distribution_link: None,
    }
}

pub fn png(name: &str) -> ImageUpload {
    ImageUpload::new(name, vec![0x89, b'P', b'N', b'G']).with_content_type("image/png")
}

pub const NO_SKILLS: &[&str] = &[];
