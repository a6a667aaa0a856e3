//! Portfolio types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attachment::Thumbnail;
use super::patch::Patch;
use super::skill::PortfolioSkill;
use super::{PortfolioId, UserId};
use crate::errors::{FolioError, Result};

/// Persisted portfolio with its skills and thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: PortfolioId,
    /// Immutable after creation
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub git_link: Option<String>,
    pub distribution_link: Option<String>,
    pub view_count: i64,
    pub likes_count: i64,
    pub skills: Vec<PortfolioSkill>,
    pub thumbnail: Thumbnail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller input for creating a portfolio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    /// Claimed owner; must be the acting user
    pub owner_id: Option<UserId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub git_link: Option<String>,
    #[serde(default)]
    pub distribution_link: Option<String>,
}

/// Validated create payload with a resolved thumbnail and normalized
/// skill names. Skills are looked up or created when the draft is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioDraft {
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub git_link: Option<String>,
    pub distribution_link: Option<String>,
    pub thumbnail_url: String,
    pub skill_names: Vec<String>,
}

impl PortfolioDraft {
    pub fn new(
        owner_id: UserId,
        input: NewPortfolio,
        thumbnail_url: String,
        skill_names: Vec<String>,
    ) -> Self {
        Self {
            owner_id,
            title: input.title,
            description: input.description,
            content: input.content,
            git_link: input.git_link,
            distribution_link: input.distribution_link,
            thumbnail_url,
            skill_names,
        }
    }
}

/// Partial update of a portfolio's editable fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPatch {
    pub id: PortfolioId,
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub content: Patch<String>,
    #[serde(default)]
    pub git_link: Patch<String>,
    #[serde(default)]
    pub distribution_link: Patch<String>,
}

impl PortfolioPatch {
    pub fn new(id: PortfolioId) -> Self {
        Self { id, ..Self::default() }
    }

    /// Reject patches that would leave the portfolio without a title.
    pub fn validate(&self) -> Result<()> {
        match &self.title {
            Patch::Clear => Err(FolioError::InvalidArgument("title cannot be cleared".into())),
            Patch::Set(title) if title.trim().is_empty() => {
                Err(FolioError::InvalidArgument("title cannot be blank".into()))
            }
            _ => Ok(()),
        }
    }

    /// Apply every present field; absent fields keep their stored value.
    pub fn apply_to(self, portfolio: &mut Portfolio) -> Result<()> {
        self.validate()?;
        if let Patch::Set(title) = self.title {
            portfolio.title = title;
        }
        self.description.apply_to(&mut portfolio.description);
        self.content.apply_to(&mut portfolio.content);
        self.git_link.apply_to(&mut portfolio.git_link);
        self.distribution_link.apply_to(&mut portfolio.distribution_link);
        Ok(())
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioSort {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "views")]
    Views,
    #[serde(rename = "likes")]
    Likes,
}

impl PortfolioSort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Views => "views",
            Self::Likes => "likes",
        }
    }
}

impl FromStr for PortfolioSort {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "createdAt" => Ok(Self::CreatedAt),
            "views" => Ok(Self::Views),
            "likes" => Ok(Self::Likes),
            other => Err(FolioError::SearchConditionMismatch(format!("unknown sort key '{other}'"))),
        }
    }
}

impl fmt::Display for PortfolioSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field a search value is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchCategory {
    /// Exact author display name
    #[serde(rename = "userName")]
    UserName,
    /// Title substring
    #[serde(rename = "title")]
    Title,
    /// Skill name
    #[serde(rename = "skill")]
    Skill,
}

impl SearchCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserName => "userName",
            Self::Title => "title",
            Self::Skill => "skill",
        }
    }
}

impl FromStr for SearchCategory {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "userName" => Ok(Self::UserName),
            "title" => Ok(Self::Title),
            "skill" => Ok(Self::Skill),
            other => Err(FolioError::SearchConditionMismatch(format!(
                "unknown search category '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
