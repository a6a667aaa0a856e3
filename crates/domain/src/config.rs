//! Configuration structures
//!
//! Loaded by `folio-infra::config::loader` from the environment or a
//! TOML/JSON file. Every section has defaults so partial files are valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DB_PATH, DEFAULT_DB_POOL_SIZE, DEFAULT_LOG_LEVEL, DEFAULT_THUMBNAIL_URL, IMAGE_BUCKET,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub attachments: AttachmentConfig,
    pub logging: LoggingConfig,
}

/// SQLite database settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_DB_PATH), pool_size: DEFAULT_DB_POOL_SIZE }
    }
}

/// Where uploaded images are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentBackend {
    /// Files under `root_dir`, served from `public_base_url`
    #[default]
    Local,
    /// S3-compatible object storage at `endpoint`
    Http,
}

impl std::str::FromStr for AttachmentBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "http" | "s3" => Ok(Self::Http),
            other => Err(format!("unknown attachment backend '{other}'")),
        }
    }
}

/// Attachment store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachmentConfig {
    pub backend: AttachmentBackend,
    /// Local backend: directory blobs are written to
    pub root_dir: PathBuf,
    /// Public URL prefix under which stored blobs are reachable
    pub public_base_url: String,
    /// Http backend: object storage endpoint
    pub endpoint: Option<String>,
    pub default_thumbnail_url: String,
    pub bucket: String,
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            backend: AttachmentBackend::Local,
            root_dir: PathBuf::from("attachments"),
            public_base_url: "http://localhost:8080/files".to_string(),
            endpoint: None,
            default_thumbnail_url: DEFAULT_THUMBNAIL_URL.to_string(),
            bucket: IMAGE_BUCKET.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
