use folio_model::{BlogPost, SkillDetail, SkillProject, SkillSlug, Video};

use super::content::ContentSection;
use crate::catalog::{Catalog, SkillLookup};
use crate::navigation::Route;
use crate::sections::SectionId;

pub const BACK_LABEL: &str = "Back to Skills";

/// One of the three summary tiles under the skill description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

/// `/skill/:name`. Unknown or missing names render the catalog default.
#[derive(Debug, Clone)]
pub struct SkillPage<'a> {
    detail: &'a SkillDetail,
    requested: Option<&'a SkillSlug>,
    fell_back: bool,
}

impl<'a> SkillPage<'a> {
    pub fn new(catalog: &'a Catalog, requested: Option<&'a SkillSlug>) -> Self {
        let lookup = match requested {
            Some(slug) => catalog.skill_or_default(slug),
            None => SkillLookup {
                detail: catalog.default_skill(),
                fell_back: true,
            },
        };
        Self {
            detail: lookup.detail,
            requested,
            fell_back: lookup.fell_back,
        }
    }

    pub fn detail(&self) -> &'a SkillDetail {
        self.detail
    }

    pub fn name(&self) -> &'a str {
        &self.detail.name
    }

    pub fn description(&self) -> &'a str {
        &self.detail.description
    }

    /// True when the page shows the default skill instead of the requested one.
    pub fn fell_back(&self) -> bool {
        self.fell_back
    }

    pub fn stats(&self) -> [StatTile; 3] {
        [
            StatTile {
                label: "Proficiency Level",
                value: self.detail.level.to_string(),
            },
            StatTile {
                label: "Experience",
                value: self.detail.experience.clone(),
            },
            StatTile {
                label: "Projects Completed",
                value: format!("{}+", self.detail.projects.len()),
            },
        ]
    }

    pub fn certifications(&self) -> &'a [String] {
        &self.detail.certifications
    }

    pub fn projects(&self) -> &'a [SkillProject] {
        &self.detail.projects
    }

    pub fn videos(&self) -> &'a [Video] {
        &self.detail.videos
    }

    pub fn blogs(&self) -> &'a [BlogPost] {
        &self.detail.blogs
    }

    pub fn content(&self) -> ContentSection<'a> {
        ContentSection::from_lists(&self.detail.videos, &self.detail.blogs)
    }

    pub fn cta_heading(&self) -> String {
        format!("Need Help with {}?", self.detail.name)
    }

    /// Echoes what the visitor asked for, even after a fallback.
    pub fn cta_body(&self) -> String {
        let requested = self.requested.unwrap_or(&self.detail.slug);
        format!(
            "I'm available for consultation, code reviews, and hands-on implementation. Let's discuss how I can help you succeed with your {} projects.",
            requested.as_str().to_uppercase()
        )
    }

    pub fn back_route(&self) -> Route {
        Route::section(SectionId::Skills)
    }

    pub fn contact_route(&self) -> Route {
        Route::section(SectionId::Contact)
    }
}
