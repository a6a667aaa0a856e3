//! User account types
//!
//! Users are read-only to the services; accounts are registered elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Persisted user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Display name, matched exactly by author search
    pub name: String,
    pub profile_img: Option<String>,
    pub git_link: Option<String>,
    pub blog_link: Option<String>,
    pub about: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Account seed data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_img: Option<String>,
    #[serde(default)]
    pub git_link: Option<String>,
    #[serde(default)]
    pub blog_link: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
}

impl NewUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            profile_img: None,
            git_link: None,
            blog_link: None,
            about: None,
        }
    }
}
