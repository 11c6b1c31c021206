use super::{
    ContactSection, ContentSection, ProfileSection, ProjectsSection, SectionId, SkillsSection,
};
use crate::catalog::Catalog;

#[derive(Debug, Clone)]
pub enum Section<'a> {
    Profile(ProfileSection<'a>),
    Skills(SkillsSection<'a>),
    Projects(ProjectsSection<'a>),
    Content(ContentSection<'a>),
    Contact(ContactSection<'a>),
}

impl Section<'_> {
    pub fn id(&self) -> SectionId {
        match self {
            Section::Profile(_) => SectionId::Profile,
            Section::Skills(_) => SectionId::Skills,
            Section::Projects(_) => SectionId::Projects,
            Section::Content(_) => SectionId::Content,
            Section::Contact(_) => SectionId::Contact,
        }
    }
}

/// The home page: every section, in [`SectionId::ORDER`].
#[derive(Debug, Clone)]
pub struct HomeView<'a> {
    pub sections: Vec<Section<'a>>,
}

impl<'a> HomeView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let sections = SectionId::ORDER
            .into_iter()
            .map(|id| match id {
                SectionId::Profile => Section::Profile(ProfileSection::new(catalog.profile())),
                SectionId::Skills => Section::Skills(SkillsSection::new(catalog.skills())),
                SectionId::Projects => Section::Projects(ProjectsSection::new(catalog)),
                SectionId::Content => Section::Content(ContentSection::new(catalog)),
                SectionId::Contact => Section::Contact(ContactSection::new(catalog)),
            })
            .collect();
        Self { sections }
    }

    pub fn section(&self, id: SectionId) -> Option<&Section<'a>> {
        self.sections.iter().find(|section| section.id() == id)
    }

    pub fn projects(&self) -> Option<&ProjectsSection<'a>> {
        match self.section(SectionId::Projects) {
            Some(Section::Projects(projects)) => Some(projects),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_render_in_fixed_order() {
        let catalog = Catalog::builtin().unwrap();
        let home = HomeView::new(&catalog);
        let ids: Vec<SectionId> = home.sections.iter().map(Section::id).collect();
        assert_eq!(ids, SectionId::ORDER);
        assert_eq!(home.projects().map(|p| p.carousel_len()), Some(3));
    }
}
