//! # Folio Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for users, portfolios, thumbnails,
//!   content images, skills, comments and the attachment store
//! - The ownership guard and the services built on it
//!
//! ## Architecture Principles
//! - Only depends on `folio-domain`
//! - No database, HTTP, or filesystem code
//! - All external dependencies via traits
//! - Every mutation receives the acting user explicitly

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod access;
pub mod attachment;
pub mod comment;
pub mod portfolio;
pub mod skill;
pub mod user;

pub use access::AccessGuard;
pub use attachment::ports::{AttachmentStore, ImageRepository, ThumbnailRepository};
pub use attachment::{ContentImageLibrary, ThumbnailManager};
pub use comment::ports::CommentRepository;
pub use comment::CommentService;
pub use portfolio::ports::{PortfolioFilter, PortfolioRepository};
pub use portfolio::PortfolioCatalog;
pub use skill::ports::SkillRepository;
pub use skill::SkillResolver;
pub use user::ports::UserRepository;
