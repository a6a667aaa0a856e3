//! # Folio Domain
//!
//! Business domain types and models for Folio.
//!
//! This crate contains:
//! - Users, portfolios, thumbnails, skills and user comments
//! - Paging and search value types
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Folio crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
