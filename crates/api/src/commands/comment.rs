//! User comment commands

use folio_domain::{Actor, CommentId, CommentPatch, CommentView, NewComment, UserId};

use super::response::{ApiResult, PageParams, PageResponse};
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Post a comment on `input.recipient_id`'s profile as the acting user.
pub async fn post_user_comment(
    ctx: &AppContext,
    actor: Actor,
    input: NewComment,
) -> ApiResult<CommentView> {
    execute_command("comment::post_user_comment", async {
        ctx.comments.create(actor, input).await
    })
    .await
}

/// Edit a comment. Only its writer may do so.
pub async fn patch_user_comment(
    ctx: &AppContext,
    actor: Actor,
    patch: CommentPatch,
) -> ApiResult<CommentView> {
    execute_command("comment::patch_user_comment", async {
        ctx.comments.update(actor, patch).await
    })
    .await
}

pub async fn delete_user_comment(ctx: &AppContext, id: CommentId) -> ApiResult<()> {
    execute_command("comment::delete_user_comment", async { ctx.comments.delete(id).await })
        .await
}

/// Comments left on a user's profile, newest first.
pub async fn get_user_comments(
    ctx: &AppContext,
    user_id: UserId,
    paging: PageParams,
) -> ApiResult<PageResponse<CommentView>> {
    execute_command("comment::get_user_comments", async {
        let page = paging.to_request()?;
        Ok(ctx.comments.list_by_recipient(user_id, page).await?.into())
    })
    .await
}

/// Comments a user has written on other profiles, newest first.
pub async fn get_writer_comments(
    ctx: &AppContext,
    writer_id: UserId,
    paging: PageParams,
) -> ApiResult<PageResponse<CommentView>> {
    execute_command("comment::get_writer_comments", async {
        let page = paging.to_request()?;
        Ok(ctx.comments.list_by_author(writer_id, page).await?.into())
    })
    .await
}
