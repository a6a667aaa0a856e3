//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `FOLIO_DB_PATH` is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FOLIO_DB_PATH`: Database file path (required for env loading)
//! - `FOLIO_DB_POOL_SIZE`: Connection pool size
//! - `FOLIO_ATTACHMENT_BACKEND`: `local` or `http`
//! - `FOLIO_ATTACHMENT_ROOT`: Directory for the local backend
//! - `FOLIO_ATTACHMENT_PUBLIC_URL`: Public URL prefix of stored blobs
//! - `FOLIO_ATTACHMENT_ENDPOINT`: Object storage endpoint for the http backend
//! - `FOLIO_DEFAULT_THUMBNAIL_URL`: Shared default thumbnail
//! - `FOLIO_LOG_LEVEL`: Log filter used when `RUST_LOG` is unset
//! - `FOLIO_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./folio.toml`, `./folio.json`, `./config.toml`, `./config.json`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use folio_domain::{AttachmentBackend, Config, FolioError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["folio.toml", "folio.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `FolioError::Config` if configuration cannot be loaded from
/// either source or a value is malformed.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `FOLIO_DB_PATH` is required; every other variable falls back to its
/// default.
///
/// # Errors
/// Returns `FolioError::Config` if `FOLIO_DB_PATH` is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.database.path = PathBuf::from(env_var("FOLIO_DB_PATH")?);
    if let Some(pool_size) = optional_env("FOLIO_DB_POOL_SIZE") {
        config.database.pool_size = pool_size
            .parse::<u32>()
            .map_err(|e| FolioError::Config(format!("Invalid pool size: {e}")))?;
    }

    if let Some(backend) = optional_env("FOLIO_ATTACHMENT_BACKEND") {
        config.attachments.backend =
            backend.parse::<AttachmentBackend>().map_err(FolioError::Config)?;
    }
    if let Some(root) = optional_env("FOLIO_ATTACHMENT_ROOT") {
        config.attachments.root_dir = PathBuf::from(root);
    }
    if let Some(url) = optional_env("FOLIO_ATTACHMENT_PUBLIC_URL") {
        config.attachments.public_base_url = url;
    }
    config.attachments.endpoint =
        optional_env("FOLIO_ATTACHMENT_ENDPOINT").or(config.attachments.endpoint);
    if let Some(url) = optional_env("FOLIO_DEFAULT_THUMBNAIL_URL") {
        config.attachments.default_thumbnail_url = url;
    }

    if let Some(level) = optional_env("FOLIO_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("FOLIO_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// file extension.
///
/// # Errors
/// Returns `FolioError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FolioError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FolioError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FolioError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FolioError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FolioError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(FolioError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| FolioError::Config(format!("Missing required environment variable: {key}")))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
