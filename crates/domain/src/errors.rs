//! Error types used throughout the application

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CommentId, PortfolioId, UserId};

/// The kind of mutation an ownership check was guarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    Creating,
    Editing,
    Deleting,
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Creating => "creating",
            Self::Editing => "editing",
            Self::Deleting => "deleting",
        };
        f.write_str(label)
    }
}

/// Main error type for Folio
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FolioError {
    #[error("Database error: {0}")]
    Database(String),

    /// Attachment transport failure, surfaced to callers unchanged.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Portfolio not found: {0}")]
    PortfolioNotFound(PortfolioId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("No permission for {0}")]
    NoPermission(PermissionAction),

    /// The acting user does not match the writer named in the request.
    #[error("Invalid user status")]
    InvalidUserStatus,

    #[error("Search condition mismatch: {0}")]
    SearchConditionMismatch(String),

    #[error("No portfolio matched the search")]
    PortfolioNotSearched,
}

impl FolioError {
    /// True for failures of the surrounding infrastructure rather than a
    /// rejected business request.
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Storage(_) | Self::Config(_) | Self::Internal(_))
    }
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
