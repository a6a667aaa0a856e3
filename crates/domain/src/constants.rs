//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Attachments
pub const DEFAULT_THUMBNAIL_URL: &str =
    "https://main001-portfolio.s3.ap-northeast-2.amazonaws.com/default/default.png";
pub const IMAGE_BUCKET: &str = "images";

// Paging
pub const DEFAULT_PAGE_SIZE: u32 = 15;
pub const DEFAULT_PAGE: u32 = 1;

// Database
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;
pub const DEFAULT_DB_PATH: &str = "folio.db";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
