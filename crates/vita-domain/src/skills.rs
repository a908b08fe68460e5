//! Skills taxonomy - categories of named, levelled skills

use serde::{Deserialize, Serialize};

/// One entry of `technicalSkills`
///
/// The extra `category` wrapper is part of the interchange shape:
/// `[{"category": {"name": ..., "skills": [...]}}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalSkill {
    /// The wrapped category
    pub category: SkillCategory,
}

/// A named group of skills, e.g. "Backend"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category name
    pub name: String,

    /// Skills in source order
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A single skill with its proficiency level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Skill name, e.g. "Rust"
    pub name: String,

    /// Numeric proficiency level (1 = basic knowledge)
    pub level: u8,

    /// Human-readable description of the level
    #[serde(default)]
    pub level_description: String,
}

impl TechnicalSkill {
    /// Wrap a category
    pub fn new(name: impl Into<String>, skills: Vec<Skill>) -> Self {
        Self {
            category: SkillCategory {
                name: name.into(),
                skills,
            },
        }
    }

    /// Skill names of this category in order
    pub fn skill_names(&self) -> Vec<&str> {
        self.category.skills.iter().map(|s| s.name.as_str()).collect()
    }
}

impl Skill {
    /// Create a skill
    pub fn new(name: impl Into<String>, level: u8, level_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level,
            level_description: level_description.into(),
        }
    }
}
