//! View models for the home sections and the skill page.
//!
//! Every model borrows from the [`Catalog`](crate::catalog::Catalog) and
//! only adds what a renderer would otherwise compute inline: labels, routes,
//! truncated tag lists and formatted counters.

pub mod contact;
pub mod content;
pub mod home;
pub mod profile;
pub mod projects;
pub mod skill_page;
pub mod skills;

use chrono::NaiveDate;

pub use contact::ContactSection;
pub use content::{BlogCard, ContentSection, ContentTab, VideoCard};
pub use home::{HomeView, Section};
pub use profile::ProfileSection;
pub use projects::{ProjectTile, ProjectsSection, TagSummary};
pub use skill_page::{SkillPage, StatTile};
pub use skills::{SkillCard, SkillsSection};

/// Anchor targets on the home page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Profile,
    Skills,
    Projects,
    Content,
    Contact,
}

impl SectionId {
    pub const ORDER: [SectionId; 5] = [
        SectionId::Profile,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Content,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Profile => "profile",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Content => "content",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ORDER
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(anchor.trim()))
    }

    /// Label used in the header navigation.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Profile => "Home",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Content => "Content",
            SectionId::Contact => "Contact",
        }
    }
}

/// `Jan 15, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
