//! Ownership/access guard
//!
//! Verifies that the acting user is who a request claims and that only a
//! resource's owner mutates it. Read-only; never writes.

use std::sync::Arc;

use folio_domain::{Actor, FolioError, PermissionAction, Result, User, UserId};
use tracing::debug;

use crate::user::ports::UserRepository;

/// Identity and ownership checks shared by the services
#[derive(Clone)]
pub struct AccessGuard {
    users: Arc<dyn UserRepository>,
}

impl AccessGuard {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Resolve a user, failing with `UserNotFound`.
    pub async fn require_user(&self, id: UserId) -> Result<User> {
        self.users.find_by_id(id).await?.ok_or(FolioError::UserNotFound(id))
    }

    /// The claimed owner of a new resource must exist and be the actor.
    pub async fn authorize_create(&self, actor: Actor, claimed_owner: UserId) -> Result<User> {
        let Some(owner) = self.users.find_by_id(claimed_owner).await? else {
            debug!(user_id = claimed_owner, "claimed owner does not exist");
            return Err(FolioError::NoPermission(PermissionAction::Creating));
        };

        if !actor.is(owner.id) {
            debug!(
                user_id = claimed_owner,
                actor_id = actor.user_id(),
                "actor is not the claimed owner"
            );
            return Err(FolioError::NoPermission(PermissionAction::Creating));
        }

        Ok(owner)
    }

    /// The actor must exist and own the resource.
    pub async fn authorize_owner(
        &self,
        actor: Actor,
        resource_owner: UserId,
        action: PermissionAction,
    ) -> Result<()> {
        if !actor.is(resource_owner) {
            debug!(
                actor_id = actor.user_id(),
                owner_id = resource_owner,
                %action,
                "actor does not own the resource"
            );
            return Err(FolioError::NoPermission(action));
        }

        if self.users.find_by_id(actor.user_id()).await?.is_none() {
            debug!(actor_id = actor.user_id(), %action, "acting user no longer exists");
            return Err(FolioError::NoPermission(action));
        }

        Ok(())
    }

    /// The writer named in a request must be the actor.
    pub fn ensure_writer(actor: Actor, writer_id: UserId) -> Result<()> {
        if actor.is(writer_id) {
            Ok(())
        } else {
            debug!(actor_id = actor.user_id(), writer_id, "writer does not match actor");
            Err(FolioError::InvalidUserStatus)
        }
    }
}
