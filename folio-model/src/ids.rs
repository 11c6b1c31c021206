//! Strongly typed identifiers for catalog entries.

use std::fmt;

use crate::error::{ModelError, Result};

/// Identifier of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ProjectId(u32);

impl ProjectId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a video or blog post. Unique within its own list only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ContentId(u32);

impl ContentId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Lower-cased skill identifier used in `/skill/:slug` paths.
///
/// Slugs are compared case-insensitively by construction: every constructor
/// lower-cases its input, so `AWS`, `Aws` and `aws` are the same slug.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillSlug(String);

impl SkillSlug {
    /// Parse a slug from a path segment. Empty segments and segments with a
    /// path separator are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains('/') {
            return Err(ModelError::InvalidSlug(raw.to_string()));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Derive the slug for a skill display name (`"Kubernetes"` -> `kubernetes`).
    pub fn from_name(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SkillSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SkillSlug {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SkillSlug::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_lowercased() {
        let slug = SkillSlug::parse("  Kubernetes ").unwrap();
        assert_eq!(slug.as_str(), "kubernetes");
        assert_eq!(slug, SkillSlug::from_name("KUBERNETES"));
    }

    #[test]
    fn slug_rejects_empty_and_nested_segments() {
        assert!(SkillSlug::parse("").is_err());
        assert!(SkillSlug::parse("   ").is_err());
        assert!(SkillSlug::parse("aws/extra").is_err());
    }
}
