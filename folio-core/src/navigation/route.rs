use std::fmt;
use std::str::FromStr;

use folio_model::SkillSlug;
use thiserror::Error;

use crate::sections::SectionId;

const SKILL_PREFIX: &str = "skill";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches `{0}`")]
    NotFound(String),
}

/// A location inside the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, optionally scrolled to a section (`/#contact`).
    Home { anchor: Option<SectionId> },
    /// `/skill/:name`. `None` when the name segment is missing or does not
    /// decode to a usable slug; it resolves like an unknown skill.
    Skill(Option<SkillSlug>),
}

impl Default for Route {
    fn default() -> Self {
        Route::home()
    }
}

impl Route {
    pub const fn home() -> Self {
        Route::Home { anchor: None }
    }

    pub const fn section(section: SectionId) -> Self {
        Route::Home {
            anchor: Some(section),
        }
    }

    pub fn skill(slug: SkillSlug) -> Self {
        Route::Skill(Some(slug))
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home { .. })
    }

    /// Parse a site path.
    ///
    /// Query strings are ignored and trailing slashes are tolerated. The
    /// skill segment is percent-decoded and lower-cased; a segment that
    /// cannot be decoded still matches the skill route. Unknown home anchors
    /// are dropped rather than rejected.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let (rest, fragment) = match trimmed.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (trimmed, None),
        };
        let rest = rest.split_once('?').map_or(rest, |(rest, _)| rest);

        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => {
                let anchor = fragment.and_then(SectionId::from_anchor);
                Ok(Route::Home { anchor })
            }
            [prefix] if prefix.eq_ignore_ascii_case(SKILL_PREFIX) => Ok(Route::Skill(None)),
            [prefix, name] if prefix.eq_ignore_ascii_case(SKILL_PREFIX) => {
                let slug = urlencoding::decode(name)
                    .ok()
                    .and_then(|decoded| SkillSlug::parse(&decoded).ok());
                Ok(Route::Skill(slug))
            }
            _ => Err(RouteError::NotFound(trimmed.to_string())),
        }
    }

    /// Canonical path for this route.
    pub fn to_path(&self) -> String {
        match self {
            Route::Home { anchor: None } => "/".to_string(),
            Route::Home {
                anchor: Some(section),
            } => format!("/#{}", section.anchor()),
            Route::Skill(None) => format!("/{SKILL_PREFIX}"),
            Route::Skill(Some(slug)) => {
                format!("/{SKILL_PREFIX}/{}", urlencoding::encode(slug.as_str()))
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_home_and_anchors() {
        assert_eq!(Route::parse("/").unwrap(), Route::home());
        assert_eq!(Route::parse("").unwrap(), Route::home());
        assert_eq!(
            Route::parse("/#contact").unwrap(),
            Route::section(SectionId::Contact)
        );
        assert_eq!(Route::parse("/#nowhere").unwrap(), Route::home());
    }

    #[test]
    fn skill_segment_is_decoded_and_lowercased() {
        let route = Route::parse("/skill/AWS").unwrap();
        assert_eq!(route, Route::skill(SkillSlug::from_name("aws")));

        let route = Route::parse("/skill/Node%20JS/").unwrap();
        assert_eq!(route, Route::skill(SkillSlug::from_name("node js")));

        assert_eq!(Route::parse("/skill").unwrap(), Route::Skill(None));
        assert_eq!(Route::parse("/skill/?tab=videos").unwrap(), Route::Skill(None));
    }

    #[test]
    fn unmatched_paths_are_errors() {
        assert_eq!(
            Route::parse("/blog/post-1"),
            Err(RouteError::NotFound("/blog/post-1".into()))
        );
        assert!(matches!(
            Route::parse("/skill/aws/extra"),
            Err(RouteError::NotFound(_))
        ));
    }

    #[test]
    fn undecodable_skill_segments_still_match_the_skill_route() {
        for path in ["/skill/%20", "/skill/%2F", "/skill/%FF"] {
            assert_eq!(Route::parse(path).unwrap(), Route::Skill(None), "{path}");
        }
    }

    #[test]
    fn canonical_paths_round_trip() {
        for path in ["/", "/#projects", "/skill", "/skill/kubernetes", "/skill/node%20js"] {
            let route: Route = path.parse().unwrap();
            assert_eq!(route.to_path(), path);
        }
    }
}
