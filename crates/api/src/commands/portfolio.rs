//! Portfolio commands

use folio_domain::{
    Actor, ImageUpload, NewPortfolio, Portfolio, PortfolioId, PortfolioPatch, UserId,
};
use tracing::info;

use super::response::{ApiResult, PageParams, PageResponse};
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Likes added or removed by a single like/unlike
const LIKE_STEP: i64 = 1;

/// Create a portfolio for the acting user.
///
/// `skills` are names; unknown names are registered on the fly.
pub async fn create_portfolio(
    ctx: &AppContext,
    actor: Actor,
    input: NewPortfolio,
    skills: Vec<String>,
    thumbnail: Option<ImageUpload>,
) -> ApiResult<Portfolio> {
    execute_command("portfolio::create_portfolio", async {
        ctx.portfolios.create(actor, input, &skills, thumbnail.as_ref()).await
    })
    .await
}

/// Portfolio detail. Each call counts as one view.
pub async fn get_portfolio(ctx: &AppContext, id: PortfolioId) -> ApiResult<Portfolio> {
    execute_command("portfolio::get_portfolio", async {
        let views = ctx.portfolios.increase_view_count(id).await?;
        info!(portfolio_id = id, views, "portfolio viewed");
        ctx.portfolios.find(id).await
    })
    .await
}

pub async fn update_portfolio(
    ctx: &AppContext,
    actor: Actor,
    patch: PortfolioPatch,
    skills: Vec<String>,
) -> ApiResult<Portfolio> {
    execute_command("portfolio::update_portfolio", async {
        ctx.portfolios.update(actor, patch, &skills).await
    })
    .await
}

/// Replace the thumbnail and return the new image URL. Without an image
/// the portfolio falls back to the default thumbnail.
pub async fn update_portfolio_thumbnail(
    ctx: &AppContext,
    actor: Actor,
    id: PortfolioId,
    thumbnail: Option<ImageUpload>,
) -> ApiResult<String> {
    execute_command("portfolio::update_portfolio_thumbnail", async {
        ctx.portfolios.update_thumbnail(actor, id, thumbnail.as_ref()).await
    })
    .await
}

pub async fn delete_portfolio(ctx: &AppContext, actor: Actor, id: PortfolioId) -> ApiResult<()> {
    execute_command("portfolio::delete_portfolio", async {
        ctx.portfolios.delete(actor, id).await
    })
    .await
}

/// Returns the new like count.
pub async fn like_portfolio(ctx: &AppContext, id: PortfolioId) -> ApiResult<i64> {
    execute_command("portfolio::like_portfolio", async {
        ctx.portfolios.update_likes(id, LIKE_STEP).await
    })
    .await
}

/// Returns the new like count, which never drops below zero.
pub async fn unlike_portfolio(ctx: &AppContext, id: PortfolioId) -> ApiResult<i64> {
    execute_command("portfolio::unlike_portfolio", async {
        ctx.portfolios.update_likes(id, -LIKE_STEP).await
    })
    .await
}

/// A user's portfolios ordered by `sort` (`createdAt`, `views` or `likes`).
pub async fn get_user_portfolios(
    ctx: &AppContext,
    user_id: UserId,
    sort: &str,
    paging: PageParams,
) -> ApiResult<PageResponse<Portfolio>> {
    execute_command("portfolio::get_user_portfolios", async {
        let page = paging.to_request()?;
        let result = ctx.portfolios.list_by_user(user_id, sort, page).await?;
        Ok(PageResponse::from(result))
    })
    .await
}

/// Search by `category` (`userName`, `title` or `skill`). An empty `value`
/// lists every portfolio.
pub async fn search_portfolios(
    ctx: &AppContext,
    category: &str,
    sort: &str,
    value: &str,
    paging: PageParams,
) -> ApiResult<PageResponse<Portfolio>> {
    execute_command("portfolio::search_portfolios", async {
        let page = paging.to_request()?;
        let result = ctx.portfolios.search(page, category, sort, value).await?;
        Ok(PageResponse::from(result))
    })
    .await
}
