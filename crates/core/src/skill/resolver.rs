//! Skill resolver
//!
//! Normalizes submitted skill names for portfolio writes and maps search
//! terms to existing skills. Input order is preserved and repeated names
//! yield repeated associations.

use std::sync::Arc;

use folio_domain::{Result, SkillId};

use super::ports::SkillRepository;

#[derive(Clone)]
pub struct SkillResolver {
    skills: Arc<dyn SkillRepository>,
}

impl SkillResolver {
    pub fn new(skills: Arc<dyn SkillRepository>) -> Self {
        Self { skills }
    }

    /// Trim every name and drop blank ones.
    pub fn normalize<S: AsRef<str>>(names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Skill ID for a search term, if such a skill exists.
    pub async fn find_skill_id(&self, name: &str) -> Result<Option<SkillId>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        self.skills.find_id_by_name(name).await
    }
}
