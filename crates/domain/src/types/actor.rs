//! Authenticated identity

use serde::{Deserialize, Serialize};

use super::UserId;

/// The authenticated user on whose behalf a mutation runs.
///
/// Resolved by the boundary layer and passed explicitly into every
/// mutating service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(UserId);

impl Actor {
    pub const fn new(user_id: UserId) -> Self {
        Self(user_id)
    }

    pub const fn user_id(self) -> UserId {
        self.0
    }

    /// True when this actor is the given user.
    pub const fn is(self, user_id: UserId) -> bool {
        self.0 == user_id
    }
}

impl From<UserId> for Actor {
    fn from(user_id: UserId) -> Self {
        Self(user_id)
    }
}
