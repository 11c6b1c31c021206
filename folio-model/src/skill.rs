//! Skill summaries (home grid) and skill details (`/skill/:slug` page).

use std::fmt;

use crate::content::{BlogPost, Video};
use crate::ids::{ProjectId, SkillSlug};

/// Icon shown on a skill card. Rendering maps each variant to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SkillIcon {
    Cloud,
    Terminal,
    Settings,
    Container,
    #[default]
    Code,
    Coffee,
    Database,
}

/// Entry of the home page skill grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSummary {
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: SkillIcon,
    pub project_count: u32,
}

impl SkillSummary {
    /// Slug the card links to.
    pub fn slug(&self) -> SkillSlug {
        SkillSlug::from_name(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        };
        f.write_str(label)
    }
}

/// A project listed on a skill page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillProject {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

/// Everything shown on a skill detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDetail {
    pub slug: SkillSlug,
    pub name: String,
    pub description: String,
    pub level: Proficiency,
    pub experience: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub certifications: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub projects: Vec<SkillProject>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub videos: Vec<Video>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blogs: Vec<BlogPost>,
}
