//! User comment types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CommentId, UserId};
use crate::errors::FolioError;

/// Visibility of a comment on the recipient's profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentStatus {
    #[default]
    Public,
    Private,
}

impl CommentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        }
    }
}

impl FromStr for CommentStatus {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC" => Ok(Self::Public),
            "PRIVATE" => Ok(Self::Private),
            other => Err(FolioError::InvalidArgument(format!("unknown comment status '{other}'"))),
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comment left by a writer on a recipient's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserComment {
    pub id: CommentId,
    /// Profile owner the comment is addressed to
    pub recipient_id: UserId,
    /// Author of the comment
    pub writer_id: UserId,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub recipient_id: UserId,
    pub writer_id: UserId,
    pub content: String,
    #[serde(default)]
    pub status: CommentStatus,
}

/// Content-only comment update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPatch {
    pub id: CommentId,
    pub content: String,
}

/// Comment as returned to callers, with the writer's display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: CommentId,
    pub recipient_id: UserId,
    pub writer_id: UserId,
    pub writer_name: String,
    pub writer_profile_img: Option<String>,
    pub content: String,
    pub status: CommentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommentView {
    pub fn new(comment: UserComment, writer_name: String, writer_profile_img: Option<String>) -> Self {
        Self {
            id: comment.id,
            recipient_id: comment.recipient_id,
            writer_id: comment.writer_id,
            writer_name,
            writer_profile_img,
            content: comment.content,
            status: comment.status,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_public() {
        let comment: NewComment =
            serde_json::from_str(r#"{"recipientId": 1, "writerId": 2, "content": "nice"}"#)
                .unwrap();
        assert_eq!(comment.status, CommentStatus::Public);
    }

    #[test]
    fn status_round_trips_through_str() {
        assert_eq!("PRIVATE".parse::<CommentStatus>().unwrap(), CommentStatus::Private);
        assert!("hidden".parse::<CommentStatus>().is_err());
    }
}
