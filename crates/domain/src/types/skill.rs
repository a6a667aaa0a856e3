//! Skill types

use serde::{Deserialize, Serialize};

use super::SkillId;

/// Normalized skill record, unique by case-insensitive name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

/// A portfolio's link to a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSkill {
    pub skill_id: SkillId,
    pub skill_name: String,
}

impl From<Skill> for PortfolioSkill {
    fn from(skill: Skill) -> Self {
        Self { skill_id: skill.id, skill_name: skill.name }
    }
}
