use crate::ids::ProjectId;

/// Outbound links attached to a project card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub demo: Option<String>,
    pub blog: Option<String>,
}

/// A portfolio project. Featured projects are shown in the looping carousel,
/// the rest in the grid below it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub links: ProjectLinks,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stars: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub forks: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
}
