//! # Folio Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite repositories for users, portfolios, thumbnails, content images,
//!   skills and comments
//! - Attachment stores (local filesystem and S3-compatible HTTP)
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `folio-core`
//! - Depends on `folio-common` for connection pooling
//! - Contains all "impure" code (database, filesystem, network I/O)

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod attachments;
pub mod config;
pub mod database;
pub mod errors;

// Re-export commonly used items
pub use attachments::{build_attachment_store, HttpAttachmentStore, LocalAttachmentStore};
pub use database::*;
pub use errors::InfraError;
