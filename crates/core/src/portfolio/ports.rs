//! Port interfaces for portfolio persistence
//!
//! Multi-row writes (portfolio with thumbnail and skills, skill
//! replacement, delete with cascade) are atomic inside the adapter. Skill
//! names missing from the skill store are created in the same transaction.

use async_trait::async_trait;
use folio_domain::{
    Page, PageRequest, Portfolio, PortfolioDraft, PortfolioId, PortfolioSort, Result, SkillId,
    UserId,
};

/// Row filter for paged portfolio queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioFilter {
    All,
    /// Portfolios owned by a user
    Owner(UserId),
    /// Portfolios whose owner's display name equals the value
    AuthorName(String),
    /// Portfolios whose title contains the value
    TitleContains(String),
    /// Portfolios linked to a skill
    Skill(SkillId),
}

/// Trait for portfolio persistence
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// Get a portfolio with its skills and thumbnail
    async fn find_by_id(&self, id: PortfolioId) -> Result<Option<Portfolio>>;

    /// Insert a portfolio together with its thumbnail row and skill links,
    /// creating unknown skills (matched case-insensitively)
    async fn insert(&self, draft: PortfolioDraft) -> Result<Portfolio>;

    /// Persist editable fields and replace all skill links with
    /// `skill_names`, creating unknown skills. `portfolio.skills` is ignored.
    async fn update(&self, portfolio: &Portfolio, skill_names: &[String]) -> Result<Portfolio>;

    /// Delete a portfolio, its thumbnail row and skill links.
    /// Returns false when no such portfolio exists.
    async fn delete(&self, id: PortfolioId) -> Result<bool>;

    /// Add one view in a single statement; `None` when the portfolio is missing
    async fn increment_views(&self, id: PortfolioId) -> Result<Option<i64>>;

    /// Add `delta` likes in a single statement, never going below zero;
    /// `None` when the portfolio is missing
    async fn adjust_likes(&self, id: PortfolioId, delta: i64) -> Result<Option<i64>>;

    /// Page of matching portfolios, sorted descending by `sort`.
    /// `total_elements` counts the filtered rows.
    async fn find_page(
        &self,
        filter: PortfolioFilter,
        sort: PortfolioSort,
        page: PageRequest,
    ) -> Result<Page<Portfolio>>;
}
