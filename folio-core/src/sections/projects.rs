use folio_model::Project;

use crate::catalog::Catalog;

pub const PROJECTS_HEADING: &str = "Featured Projects";
pub const PROJECTS_INTRO: &str = "Real-world DevOps solutions that demonstrate expertise in infrastructure automation, container orchestration, and modern deployment practices.";
pub const VIEW_ALL_LABEL: &str = "View All Projects on GitHub";

/// Tags shown on a grid tile before collapsing into a `+N` chip.
pub const GRID_TAG_LIMIT: usize = 2;

/// A truncated tag list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSummary<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl<'a> TagSummary<'a> {
    pub fn new(tags: &'a [String], limit: usize) -> Self {
        let cut = tags.len().min(limit);
        Self {
            shown: &tags[..cut],
            hidden: tags.len() - cut,
        }
    }

    /// `+2`, or `None` when nothing was hidden.
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectTile<'a> {
    pub project: &'a Project,
    pub tags: TagSummary<'a>,
}

impl<'a> ProjectTile<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            tags: TagSummary::new(&project.tags, GRID_TAG_LIMIT),
        }
    }
}

/// Featured carousel plus the grid of remaining projects.
#[derive(Debug, Clone)]
pub struct ProjectsSection<'a> {
    /// Carousel items, in catalog order.
    pub featured: Vec<&'a Project>,
    pub grid: Vec<ProjectTile<'a>>,
}

impl<'a> ProjectsSection<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            featured: catalog.featured_projects().collect(),
            grid: catalog.other_projects().map(ProjectTile::new).collect(),
        }
    }

    /// Item count the carousel controller is built for.
    pub fn carousel_len(&self) -> usize {
        self.featured.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_tiles_truncate_tags() {
        let catalog = Catalog::builtin().unwrap();
        let section = ProjectsSection::new(&catalog);
        assert_eq!(section.carousel_len(), 3);

        let tile = &section.grid[0];
        assert_eq!(tile.tags.shown, &["Terraform".to_string(), "AWS".to_string()]);
        assert_eq!(tile.tags.overflow_label().as_deref(), Some("+2"));
    }

    #[test]
    fn short_tag_lists_have_no_overflow() {
        let tags = vec!["Rust".to_string()];
        let summary = TagSummary::new(&tags, GRID_TAG_LIMIT);
        assert_eq!(summary.shown.len(), 1);
        assert_eq!(summary.overflow_label(), None);
    }
}
