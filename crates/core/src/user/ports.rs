//! Port interfaces for user lookup
//!
//! Users are registered and edited outside the core; services only read
//! them to verify identities.

use async_trait::async_trait;
use folio_domain::{Result, User, UserId};

/// Trait for resolving persisted users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get user by ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;
}
