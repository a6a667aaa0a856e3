//! Port interfaces for skill records
//!
//! Skills are created as part of portfolio writes (see
//! `PortfolioRepository::insert`), so this port only reads.

use async_trait::async_trait;
use folio_domain::{Result, SkillId};

/// Trait for the normalized skill store
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Look up a skill ID by name (case-insensitive)
    async fn find_id_by_name(&self, name: &str) -> Result<Option<SkillId>>;
}
