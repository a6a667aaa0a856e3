//! Portfolio catalog service - core business logic

use std::sync::Arc;

use folio_domain::{
    Actor, FolioError, ImageUpload, NewPortfolio, Page, PageRequest, PermissionAction, Portfolio,
    PortfolioDraft, PortfolioId, PortfolioPatch, PortfolioSort, Result, SearchCategory, UserId,
};
use tracing::{debug, info, warn};

use super::ports::{PortfolioFilter, PortfolioRepository};
use crate::access::AccessGuard;
use crate::attachment::ThumbnailManager;
use crate::skill::SkillResolver;

/// Create, edit, delete, count and search portfolios
pub struct PortfolioCatalog {
    portfolios: Arc<dyn PortfolioRepository>,
    guard: AccessGuard,
    thumbnails: ThumbnailManager,
    skills: SkillResolver,
}

impl PortfolioCatalog {
    pub fn new(
        portfolios: Arc<dyn PortfolioRepository>,
        guard: AccessGuard,
        thumbnails: ThumbnailManager,
        skills: SkillResolver,
    ) -> Self {
        Self { portfolios, guard, thumbnails, skills }
    }

    /// Create a portfolio owned by the actor.
    ///
    /// Ownership is verified before anything is uploaded or written. If the
    /// insert fails the freshly uploaded image is removed again.
    pub async fn create<S: AsRef<str> + Sync>(
        &self,
        actor: Actor,
        input: NewPortfolio,
        skill_names: &[S],
        image: Option<&ImageUpload>,
    ) -> Result<Portfolio> {
        let owner_id = input
            .owner_id
            .ok_or_else(|| FolioError::InvalidArgument("portfolio owner is required".into()))?;
        if input.title.trim().is_empty() {
            return Err(FolioError::InvalidArgument("portfolio title is required".into()));
        }

        self.guard.authorize_create(actor, owner_id).await?;

        let skill_names = SkillResolver::normalize(skill_names);
        let thumbnail_url = self.thumbnails.resolve(image).await?;
        let draft = PortfolioDraft::new(owner_id, input, thumbnail_url.clone(), skill_names);

        match self.portfolios.insert(draft).await {
            Ok(portfolio) => {
                info!(portfolio_id = portfolio.id, user_id = owner_id, "portfolio created");
                Ok(portfolio)
            }
            Err(err) => {
                self.thumbnails.release_upload(&thumbnail_url).await;
                Err(err)
            }
        }
    }

    /// Apply a partial update and replace the skill set.
    ///
    /// Skills are always replaced, even when the same names are resubmitted.
    pub async fn update<S: AsRef<str> + Sync>(
        &self,
        actor: Actor,
        patch: PortfolioPatch,
        skill_names: &[S],
    ) -> Result<Portfolio> {
        let mut portfolio = self.find(patch.id).await?;
        self.guard.authorize_owner(actor, portfolio.owner_id, PermissionAction::Editing).await?;

        patch.apply_to(&mut portfolio)?;
        let skill_names = SkillResolver::normalize(skill_names);

        let updated = self.portfolios.update(&portfolio, &skill_names).await?;
        info!(portfolio_id = updated.id, skills = updated.skills.len(), "portfolio updated");
        Ok(updated)
    }

    /// Swap the thumbnail and return the new image URL.
    pub async fn update_thumbnail(
        &self,
        actor: Actor,
        id: PortfolioId,
        image: Option<&ImageUpload>,
    ) -> Result<String> {
        let portfolio = self.find(id).await?;
        self.guard.authorize_owner(actor, portfolio.owner_id, PermissionAction::Editing).await?;

        self.thumbnails.replace(id, image).await
    }

    /// Delete a portfolio owned by the actor, then drop its uploaded image.
    pub async fn delete(&self, actor: Actor, id: PortfolioId) -> Result<()> {
        let portfolio = self.find(id).await?;
        self.guard.authorize_owner(actor, portfolio.owner_id, PermissionAction::Deleting).await?;

        if !self.portfolios.delete(id).await? {
            return Err(FolioError::PortfolioNotFound(id));
        }

        if let Err(err) = self.thumbnails.discard(&portfolio.thumbnail).await {
            warn!(portfolio_id = id, error = %err, "failed to delete thumbnail blob of removed portfolio");
        }

        info!(portfolio_id = id, "portfolio deleted");
        Ok(())
    }

    /// Load a portfolio. Does not count as a view.
    pub async fn find(&self, id: PortfolioId) -> Result<Portfolio> {
        self.portfolios.find_by_id(id).await?.ok_or(FolioError::PortfolioNotFound(id))
    }

    /// Count one view and return the new total.
    pub async fn increase_view_count(&self, id: PortfolioId) -> Result<i64> {
        self.portfolios.increment_views(id).await?.ok_or(FolioError::PortfolioNotFound(id))
    }

    /// Add `delta` (possibly negative) likes and return the new total.
    /// The total never drops below zero.
    pub async fn update_likes(&self, id: PortfolioId, delta: i64) -> Result<i64> {
        self.portfolios.adjust_likes(id, delta).await?.ok_or(FolioError::PortfolioNotFound(id))
    }

    /// Portfolios owned by a user, newest/most viewed/most liked first.
    pub async fn list_by_user(
        &self,
        user_id: UserId,
        sort: &str,
        page: PageRequest,
    ) -> Result<Page<Portfolio>> {
        let sort: PortfolioSort = sort.parse()?;
        self.portfolios.find_page(PortfolioFilter::Owner(user_id), sort, page).await
    }

    /// Search portfolios by author name, title or skill.
    ///
    /// An empty value lists everything regardless of category. A filtered
    /// search with no match fails with `PortfolioNotSearched`.
    pub async fn search(
        &self,
        page: PageRequest,
        category: &str,
        sort: &str,
        value: &str,
    ) -> Result<Page<Portfolio>> {
        let sort: PortfolioSort = sort.parse()?;
        let value = value.trim();

        if value.is_empty() {
            return self.portfolios.find_page(PortfolioFilter::All, sort, page).await;
        }

        let filter = match category.parse::<SearchCategory>()? {
            SearchCategory::UserName => PortfolioFilter::AuthorName(value.to_string()),
            SearchCategory::Title => PortfolioFilter::TitleContains(value.to_string()),
            SearchCategory::Skill => match self.skills.find_skill_id(value).await? {
                Some(skill_id) => PortfolioFilter::Skill(skill_id),
                None => {
                    debug!(skill = value, "search skill is unknown");
                    return Err(FolioError::PortfolioNotSearched);
                }
            },
        };

        let result = self.portfolios.find_page(filter, sort, page).await?;
        if result.total_elements == 0 {
            debug!(category, value, "search matched no portfolios");
            return Err(FolioError::PortfolioNotSearched);
        }
        Ok(result)
    }
}
