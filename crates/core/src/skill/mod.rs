//! Skill normalization

pub mod ports;
mod resolver;

pub use resolver::SkillResolver;
