//! Site content, passed explicitly into the view layer.
//!
//! A [`Catalog`] is only obtainable through [`Catalog::from_parts`] (or
//! deserialization, which goes through the same path), so every catalog in
//! circulation has a resolvable default skill and unique identifiers.

mod builtin;
pub mod error;
pub mod source;

use std::collections::HashSet;

use folio_model::{
    BlogPost, BookingOptions, Profile, Project, SkillDetail, SkillSlug, SkillSummary,
    SocialLink, Video,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

pub use error::{CatalogError, SourceError};
pub use source::{BuiltinSource, ContentSource, StaticSource};

/// Slug used when a catalog document does not name a default skill.
pub const DEFAULT_SKILL: &str = "aws";

fn default_skill_slug() -> SkillSlug {
    SkillSlug::from_name(DEFAULT_SKILL)
}

/// Raw catalog document, as written in content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogParts {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillSummary>,
    #[serde(default)]
    pub skill_details: Vec<SkillDetail>,
    #[serde(default = "default_skill_slug")]
    pub default_skill: SkillSlug,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub blogs: Vec<BlogPost>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub booking: BookingOptions,
}

/// Result of looking up a skill page.
#[derive(Debug, Clone, Copy)]
pub struct SkillLookup<'a> {
    pub detail: &'a SkillDetail,
    /// True when the requested slug was unknown and the default was used.
    pub fell_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogParts", into = "CatalogParts")]
pub struct Catalog {
    parts: CatalogParts,
    default_index: usize,
}

impl Catalog {
    /// Validate a catalog document.
    pub fn from_parts(parts: CatalogParts) -> Result<Self, CatalogError> {
        if parts.skill_details.is_empty() {
            return Err(CatalogError::NoSkillDetails);
        }

        let mut seen_details = HashSet::new();
        for detail in &parts.skill_details {
            if !seen_details.insert(&detail.slug) {
                return Err(CatalogError::DuplicateSkill(detail.slug.clone()));
            }
        }

        let mut seen_summaries = HashSet::new();
        for skill in &parts.skills {
            let slug = skill.slug();
            if !seen_summaries.insert(slug.clone()) {
                return Err(CatalogError::DuplicateSkill(slug));
            }
        }

        let mut seen_projects = HashSet::new();
        for project in &parts.projects {
            if !seen_projects.insert(project.id) {
                return Err(CatalogError::DuplicateProjectId(project.id));
            }
            let links = [
                ("github", &project.links.github),
                ("demo", &project.links.demo),
                ("blog", &project.links.blog),
            ];
            for (field, link) in links {
                if let Some(url) = link {
                    check_link(&format!("project {} {field}", project.id), url)?;
                }
            }
        }

        for social in &parts.social_links {
            if !social.url.is_empty() {
                check_link(&format!("{} social", social.platform), &social.url)?;
            }
        }

        let default_index = parts
            .skill_details
            .iter()
            .position(|detail| detail.slug == parts.default_skill)
            .ok_or_else(|| CatalogError::MissingDefaultSkill(parts.default_skill.clone()))?;

        debug!(
            skills = parts.skills.len(),
            projects = parts.projects.len(),
            videos = parts.videos.len(),
            blogs = parts.blogs.len(),
            "catalog validated"
        );

        Ok(Self {
            parts,
            default_index,
        })
    }

    /// The content the site ships with.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_parts(builtin::parts())
    }

    pub fn profile(&self) -> &Profile {
        &self.parts.profile
    }

    pub fn skills(&self) -> &[SkillSummary] {
        &self.parts.skills
    }

    pub fn skill_details(&self) -> &[SkillDetail] {
        &self.parts.skill_details
    }

    pub fn projects(&self) -> &[Project] {
        &self.parts.projects
    }

    /// Projects flagged for the looping carousel, in catalog order.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.parts.projects.iter().filter(|project| project.featured)
    }

    /// Projects shown in the grid below the carousel.
    pub fn other_projects(&self) -> impl Iterator<Item = &Project> {
        self.parts.projects.iter().filter(|project| !project.featured)
    }

    pub fn videos(&self) -> &[Video] {
        &self.parts.videos
    }

    pub fn blogs(&self) -> &[BlogPost] {
        &self.parts.blogs
    }

    pub fn social_links(&self) -> &[SocialLink] {
        &self.parts.social_links
    }

    pub fn booking(&self) -> &BookingOptions {
        &self.parts.booking
    }

    pub fn default_skill(&self) -> &SkillDetail {
        &self.parts.skill_details[self.default_index]
    }

    pub fn skill_detail(&self, slug: &SkillSlug) -> Option<&SkillDetail> {
        self.parts
            .skill_details
            .iter()
            .find(|detail| &detail.slug == slug)
    }

    /// Look up a skill page, substituting the default entry for unknown slugs.
    pub fn skill_or_default(&self, slug: &SkillSlug) -> SkillLookup<'_> {
        match self.skill_detail(slug) {
            Some(detail) => SkillLookup {
                detail,
                fell_back: false,
            },
            None => {
                debug!(%slug, fallback = %self.default_skill().slug, "unknown skill, using default");
                SkillLookup {
                    detail: self.default_skill(),
                    fell_back: true,
                }
            }
        }
    }

    pub fn into_parts(self) -> CatalogParts {
        self.parts
    }
}

impl TryFrom<CatalogParts> for Catalog {
    type Error = CatalogError;

    fn try_from(parts: CatalogParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl From<Catalog> for CatalogParts {
    fn from(catalog: Catalog) -> Self {
        catalog.parts
    }
}

fn check_link(field: &str, url: &str) -> Result<(), CatalogError> {
    Url::parse(url).map(|_| ()).map_err(|_| CatalogError::InvalidLink {
        field: field.to_string(),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::ProjectId;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.default_skill().slug.as_str(), "aws");
        assert_eq!(catalog.featured_projects().count(), 3);
        assert_eq!(catalog.other_projects().count(), 3);
        assert_eq!(catalog.skills().len(), 7);
    }

    #[test]
    fn unknown_skill_falls_back_to_default() {
        let catalog = Catalog::builtin().unwrap();
        let lookup = catalog.skill_or_default(&SkillSlug::from_name("cobol"));
        assert!(lookup.fell_back);
        assert_eq!(lookup.detail.name, "AWS (Amazon Web Services)");

        let lookup = catalog.skill_or_default(&SkillSlug::from_name("AWS"));
        assert!(!lookup.fell_back);
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let mut parts = builtin::parts();
        let mut copy = parts.projects[0].clone();
        copy.title = "Copy".into();
        parts.projects.push(copy);
        assert_eq!(
            Catalog::from_parts(parts),
            Err(CatalogError::DuplicateProjectId(ProjectId::new(1)))
        );
    }

    #[test]
    fn missing_default_skill_is_rejected() {
        let mut parts = builtin::parts();
        parts.default_skill = SkillSlug::from_name("rust");
        assert!(matches!(
            Catalog::from_parts(parts),
            Err(CatalogError::MissingDefaultSkill(_))
        ));
    }

    #[test]
    fn malformed_links_are_rejected() {
        let mut parts = builtin::parts();
        parts.projects[1].links.demo = Some("not a url".into());
        assert!(matches!(
            Catalog::from_parts(parts),
            Err(CatalogError::InvalidLink { .. })
        ));
    }

    #[test]
    fn catalog_round_trips_through_json() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn invalid_document_fails_deserialization() {
        let doc = serde_json::json!({
            "profile": { "name": "A", "headline": "B", "resume_url": null },
            "skill_details": []
        });
        let err = serde_json::from_value::<Catalog>(doc).unwrap_err();
        assert!(err.to_string().contains("no skill details"));
    }
}
