//! Port interfaces for user comment persistence

use async_trait::async_trait;
use folio_domain::{
    CommentId, CommentView, NewComment, Page, PageRequest, Result, UserComment, UserId,
};

/// Trait for user comment persistence
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<UserComment>>;

    async fn insert(&self, comment: NewComment) -> Result<UserComment>;

    /// Replace a comment's content; `None` when the comment is missing
    async fn update_content(&self, id: CommentId, content: &str) -> Result<Option<UserComment>>;

    /// Returns false when no such comment exists
    async fn delete(&self, id: CommentId) -> Result<bool>;

    /// Comments addressed to a user, newest first
    async fn find_by_recipient(
        &self,
        recipient_id: UserId,
        page: PageRequest,
    ) -> Result<Page<CommentView>>;

    /// Comments written by a user, newest first
    async fn find_by_writer(&self, writer_id: UserId, page: PageRequest)
        -> Result<Page<CommentView>>;
}
