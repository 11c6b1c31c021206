use folio_model::Profile;

use super::SectionId;

pub const VIEW_WORK_LABEL: &str = "View My Work";
pub const RESUME_LABEL: &str = "Download Resume";

/// Hero section at the top of the home page.
#[derive(Debug, Clone, Copy)]
pub struct ProfileSection<'a> {
    pub profile: &'a Profile,
}

impl<'a> ProfileSection<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn name(&self) -> &'a str {
        &self.profile.name
    }

    pub fn headline(&self) -> &'a str {
        &self.profile.headline
    }

    pub fn badges(&self) -> &'a [String] {
        &self.profile.badges
    }

    pub fn bio(&self) -> &'a [String] {
        &self.profile.bio
    }

    /// Section the primary call to action scrolls to.
    pub fn primary_target(&self) -> SectionId {
        SectionId::Projects
    }

    /// Resume link, if the catalog has one. The button is disabled otherwise.
    pub fn resume_url(&self) -> Option<&'a str> {
        self.profile.resume_url.as_deref()
    }
}
