use std::fmt;

/// Owner of the portfolio, shown in the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar_url: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub badges: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bio: Vec<String>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SocialPlatform {
    Email,
    GitHub,
    LinkedIn,
    YouTube,
    Hashnode,
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SocialPlatform::Email => "Email",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::Hashnode => "Hashnode",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocialLink {
    pub platform: SocialPlatform,
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: String,
}

/// Choices offered by the consultation booking form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookingOptions {
    #[cfg_attr(feature = "serde", serde(default))]
    pub purposes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_windows: Vec<String>,
}
