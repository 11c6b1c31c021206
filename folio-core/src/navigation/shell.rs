use tracing::{debug, warn};

use super::route::Route;
use crate::catalog::Catalog;
use crate::sections::{HomeView, SkillPage};

/// What the shell renders for the current route.
#[derive(Debug)]
pub enum View<'a> {
    Home(HomeView<'a>),
    Skill(SkillPage<'a>),
}

/// Route state plus a back stack.
#[derive(Debug, Clone, Default)]
pub struct NavigationShell {
    current: Route,
    history: Vec<Route>,
}

impl NavigationShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `path`, falling back to home when it does not parse.
    pub fn starting_at(path: &str) -> Self {
        let mut shell = Self::new();
        shell.current = resolve_path(path);
        shell
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Navigate to a path. Unmatched paths log a warning and land on home.
    pub fn navigate(&mut self, path: &str) -> &Route {
        let route = resolve_path(path);
        self.navigate_to(route)
    }

    pub fn navigate_to(&mut self, route: Route) -> &Route {
        if route != self.current {
            debug!(from = %self.current, to = %route, "navigate");
            let previous = std::mem::replace(&mut self.current, route);
            self.history.push(previous);
        }
        &self.current
    }

    /// Pop the back stack. Returns false when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                debug!(from = %self.current, to = %route, "back");
                self.current = route;
                true
            }
            None => false,
        }
    }

    /// Build the view for the current route.
    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> View<'a> {
        match &self.current {
            Route::Home { .. } => View::Home(HomeView::new(catalog)),
            Route::Skill(requested) => View::Skill(SkillPage::new(catalog, requested.as_ref())),
        }
    }
}

fn resolve_path(path: &str) -> Route {
    Route::parse(path).unwrap_or_else(|err| {
        warn!(%err, "falling back to home");
        Route::home()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionId;

    #[test]
    fn unknown_paths_fall_back_to_home() {
        let mut shell = NavigationShell::starting_at("/skill/aws");
        assert!(!shell.current().is_home());
        assert!(shell.navigate("/does/not/exist").is_home());
        assert!(shell.can_go_back());
    }

    #[test]
    fn history_walks_back() {
        let mut shell = NavigationShell::new();
        shell.navigate("/skill/linux");
        shell.navigate("/#contact");
        assert_eq!(shell.current(), &Route::section(SectionId::Contact));

        assert!(shell.back());
        assert_eq!(shell.current().to_path(), "/skill/linux");
        assert!(shell.back());
        assert_eq!(shell.current(), &Route::home());
        assert!(!shell.back());
    }

    #[test]
    fn navigating_to_the_current_route_keeps_history_flat() {
        let mut shell = NavigationShell::new();
        shell.navigate("/");
        shell.navigate("/skill/aws");
        shell.navigate("/skill/AWS");
        assert!(shell.back());
        assert!(!shell.back());
    }

    #[test]
    fn malformed_skill_names_show_the_default_skill() {
        let catalog = Catalog::builtin().unwrap();
        for path in ["/skill/%20", "/skill/%2F", "/skill/%FF"] {
            let shell = NavigationShell::starting_at(path);
            match shell.resolve(&catalog) {
                View::Skill(page) => {
                    assert!(page.fell_back(), "{path}");
                    assert_eq!(page.name(), "AWS (Amazon Web Services)");
                }
                View::Home(_) => panic!("{path} resolved to home"),
            }
        }
    }

    #[test]
    fn resolves_views() {
        let catalog = Catalog::builtin().unwrap();
        let mut shell = NavigationShell::new();
        assert!(matches!(shell.resolve(&catalog), View::Home(_)));

        shell.navigate("/skill/cobol");
        match shell.resolve(&catalog) {
            View::Skill(page) => {
                assert!(page.fell_back());
                assert_eq!(page.name(), "AWS (Amazon Web Services)");
                assert_eq!(page.cta_heading(), "Need Help with AWS (Amazon Web Services)?");
                assert!(page.cta_body().contains("your COBOL projects"));
            }
            View::Home(_) => panic!("expected skill page"),
        }
    }
}
