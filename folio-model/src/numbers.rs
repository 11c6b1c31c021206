//! Display counters shown on content cards.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Number of views, rendered compactly (`2.3K`, `1.5M`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ViewCount(u64);

impl ViewCount {
    pub const fn new(views: u64) -> Self {
        Self(views)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ViewCount {
    fn from(views: u64) -> Self {
        Self(views)
    }
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        let (scaled, suffix) = match n {
            0..=999 => return write!(f, "{n}"),
            1_000..=999_999 => (n as f64 / 1e3, "K"),
            1_000_000..=999_999_999 => (n as f64 / 1e6, "M"),
            _ => (n as f64 / 1e9, "B"),
        };
        let rendered = format!("{scaled:.1}");
        let trimmed = rendered.strip_suffix(".0").unwrap_or(&rendered);
        write!(f, "{trimmed}{suffix}")
    }
}

impl FromStr for ViewCount {
    type Err = ModelError;

    /// Accepts plain integers (`1200`, `1,200`) and compact forms (`1.2K`).
    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidViewCount(raw.to_string());
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '_')
            .collect();
        if cleaned.is_empty() {
            return Err(invalid());
        }

        let (number, multiplier) = match cleaned.chars().last() {
            Some('k' | 'K') => (&cleaned[..cleaned.len() - 1], 1e3),
            Some('m' | 'M') => (&cleaned[..cleaned.len() - 1], 1e6),
            Some('b' | 'B') => (&cleaned[..cleaned.len() - 1], 1e9),
            _ => (cleaned.as_str(), 1.0),
        };

        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        Ok(Self((value * multiplier).round() as u64))
    }
}

/// Length of a video clip, written `m:ss` or `h:mm:ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClipLength {
    seconds: u32,
}

impl ClipLength {
    pub const fn from_seconds(seconds: u32) -> Self {
        Self { seconds }
    }

    pub fn as_seconds(&self) -> u32 {
        self.seconds
    }
}

impl fmt::Display for ClipLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;
        if hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes}:{seconds:02}")
        }
    }
}

impl FromStr for ClipLength {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidClipLength(raw.to_string());
        let parts = raw
            .trim()
            .split(':')
            .map(|part| part.parse::<u32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;

        let seconds = match parts.as_slice() {
            [m, s] if *s < 60 => m * 60 + s,
            [h, m, s] if *m < 60 && *s < 60 => h * 3600 + m * 60 + s,
            _ => return Err(invalid()),
        };
        Ok(Self { seconds })
    }
}

/// Estimated reading time of a blog post, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ReadTime(u32);

impl ReadTime {
    pub const fn minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.0)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{ClipLength, ViewCount};
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for ViewCount {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_u64(self.0)
        }
    }

    impl<'de> Deserialize<'de> for ViewCount {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct ViewCountVisitor;

            impl Visitor<'_> for ViewCountVisitor {
                type Value = ViewCount;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a view count such as 2300 or \"2.3K\"")
                }

                fn visit_u64<E: de::Error>(self, v: u64) -> Result<ViewCount, E> {
                    Ok(ViewCount(v))
                }

                fn visit_i64<E: de::Error>(self, v: i64) -> Result<ViewCount, E> {
                    u64::try_from(v)
                        .map(ViewCount)
                        .map_err(|_| E::custom("view count cannot be negative"))
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<ViewCount, E> {
                    v.parse().map_err(E::custom)
                }
            }

            deserializer.deserialize_any(ViewCountVisitor)
        }
    }

    impl Serialize for ClipLength {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for ClipLength {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_count_renders_compactly() {
        assert_eq!(ViewCount::new(950).to_string(), "950");
        assert_eq!(ViewCount::new(1_200).to_string(), "1.2K");
        assert_eq!(ViewCount::new(2_000).to_string(), "2K");
        assert_eq!(ViewCount::new(2_300).to_string(), "2.3K");
        assert_eq!(ViewCount::new(1_500_000).to_string(), "1.5M");
    }

    #[test]
    fn view_count_parses_compact_and_plain_forms() {
        assert_eq!("2.3K".parse::<ViewCount>().unwrap(), ViewCount::new(2_300));
        assert_eq!("4.1k".parse::<ViewCount>().unwrap(), ViewCount::new(4_100));
        assert_eq!("1,234".parse::<ViewCount>().unwrap(), ViewCount::new(1_234));
        assert!("".parse::<ViewCount>().is_err());
        assert!("-3".parse::<ViewCount>().is_err());
        assert!("lots".parse::<ViewCount>().is_err());
    }

    #[test]
    fn clip_length_parses_minutes_and_hours() {
        let clip: ClipLength = "15:32".parse().unwrap();
        assert_eq!(clip.as_seconds(), 15 * 60 + 32);
        assert_eq!(clip.to_string(), "15:32");

        let long: ClipLength = "1:02:03".parse().unwrap();
        assert_eq!(long.as_seconds(), 3723);
        assert_eq!(long.to_string(), "1:02:03");
    }

    #[test]
    fn clip_length_rejects_out_of_range_fields() {
        assert!("10:75".parse::<ClipLength>().is_err());
        assert!("1:60:00".parse::<ClipLength>().is_err());
        assert!("12".parse::<ClipLength>().is_err());
        assert!("a:bc".parse::<ClipLength>().is_err());
    }

    #[test]
    fn read_time_label() {
        assert_eq!(ReadTime::minutes(8).to_string(), "8 min read");
    }
}
