//! Comment thread service - core business logic

use std::sync::Arc;

use folio_domain::{
    Actor, CommentId, CommentPatch, CommentView, FolioError, NewComment, PageRequest,
    PermissionAction, ResponseList, Result, UserId,
};
use tracing::info;

use super::ports::CommentRepository;
use crate::access::AccessGuard;

/// Post, edit, delete and list profile comments
pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    guard: AccessGuard,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>, guard: AccessGuard) -> Self {
        Self { comments, guard }
    }

    /// Post a comment written by the actor.
    pub async fn create(&self, actor: Actor, input: NewComment) -> Result<CommentView> {
        AccessGuard::ensure_writer(actor, input.writer_id)?;
        ensure_content(&input.content)?;

        let recipient = self.guard.require_user(input.recipient_id).await?;
        let writer = self.guard.require_user(input.writer_id).await?;

        let comment = self
            .comments
            .insert(NewComment {
                recipient_id: recipient.id,
                writer_id: writer.id,
                content: input.content,
                status: input.status,
            })
            .await?;

        info!(comment_id = comment.id, user_id = recipient.id, writer_id = writer.id, "comment created");
        Ok(CommentView::new(comment, writer.name, writer.profile_img))
    }

    /// Replace the content of a comment the actor wrote.
    pub async fn update(&self, actor: Actor, patch: CommentPatch) -> Result<CommentView> {
        let existing =
            self.comments.find_by_id(patch.id).await?.ok_or(FolioError::CommentNotFound(patch.id))?;

        if !actor.is(existing.writer_id) {
            return Err(FolioError::NoPermission(PermissionAction::Editing));
        }
        ensure_content(&patch.content)?;

        let updated = self
            .comments
            .update_content(patch.id, &patch.content)
            .await?
            .ok_or(FolioError::CommentNotFound(patch.id))?;
        let writer = self.guard.require_user(updated.writer_id).await?;

        info!(comment_id = updated.id, "comment updated");
        Ok(CommentView::new(updated, writer.name, writer.profile_img))
    }

    /// Hard-delete a comment after an existence check.
    pub async fn delete(&self, id: CommentId) -> Result<()> {
        if self.comments.find_by_id(id).await?.is_none() {
            return Err(FolioError::CommentNotFound(id));
        }
        if !self.comments.delete(id).await? {
            return Err(FolioError::CommentNotFound(id));
        }
        info!(comment_id = id, "comment deleted");
        Ok(())
    }

    /// Comments on a user's profile, newest first.
    pub async fn list_by_recipient(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<ResponseList<CommentView>> {
        self.guard.require_user(user_id).await?;
        Ok(self.comments.find_by_recipient(user_id, page).await?.into())
    }

    /// Comments a user has written, newest first.
    pub async fn list_by_author(
        &self,
        writer_id: UserId,
        page: PageRequest,
    ) -> Result<ResponseList<CommentView>> {
        self.guard.require_user(writer_id).await?;
        Ok(self.comments.find_by_writer(writer_id, page).await?.into())
    }
}

fn ensure_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        Err(FolioError::InvalidArgument("comment content cannot be blank".into()))
    } else {
        Ok(())
    }
}
