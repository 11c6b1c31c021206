use chrono::NaiveDate;

use crate::ids::ContentId;
use crate::numbers::{ClipLength, ReadTime, ViewCount};

/// A published video tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub length: ClipLength,
    pub views: ViewCount,
    pub published_at: NaiveDate,
    pub url: String,
}

/// A published blog article.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlogPost {
    pub id: ContentId,
    pub title: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cover_image_url: String,
    pub published_at: NaiveDate,
    pub read_time: ReadTime,
    pub views: ViewCount,
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: String,
}
