use folio_model::{SkillIcon, SkillSummary};

use crate::navigation::Route;

pub const SKILLS_HEADING: &str = "Technical Expertise";
pub const SKILLS_INTRO: &str = "A comprehensive toolkit for modern DevOps practices, from cloud infrastructure to automation and everything in between.";

#[derive(Debug, Clone)]
pub struct SkillCard<'a> {
    pub skill: &'a SkillSummary,
    /// Where clicking the card navigates.
    pub route: Route,
}

impl<'a> SkillCard<'a> {
    pub fn new(skill: &'a SkillSummary) -> Self {
        Self {
            skill,
            route: Route::skill(skill.slug()),
        }
    }

    pub fn name(&self) -> &'a str {
        &self.skill.name
    }

    pub fn icon(&self) -> SkillIcon {
        self.skill.icon
    }

    /// `12 projects`
    pub fn project_label(&self) -> String {
        format!("{} projects", self.skill.project_count)
    }
}

#[derive(Debug, Clone)]
pub struct SkillsSection<'a> {
    pub cards: Vec<SkillCard<'a>>,
}

impl<'a> SkillsSection<'a> {
    pub fn new(skills: &'a [SkillSummary]) -> Self {
        Self {
            cards: skills.iter().map(SkillCard::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn cards_link_to_lowercased_skill_pages() {
        let catalog = Catalog::builtin().unwrap();
        let section = SkillsSection::new(catalog.skills());
        let paths: Vec<String> = section.cards.iter().map(|card| card.route.to_path()).collect();
        assert_eq!(paths[0], "/skill/aws");
        assert_eq!(paths[3], "/skill/kubernetes");
        assert_eq!(section.cards[4].project_label(), "30 projects");
    }
}
