//! Core content model definitions shared across Folio crates.
//!
//! Everything here is immutable configuration data: projects, videos, blog
//! posts, skills and the profile. Instances are produced by a catalog source
//! and handed to the view layer; nothing in this crate mutates them.

pub use ::chrono;

pub mod content;
pub mod error;
pub mod ids;
pub mod numbers;
pub mod profile;
pub mod project;
pub mod skill;

pub use content::{BlogPost, Video};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ContentId, ProjectId, SkillSlug};
pub use numbers::{ClipLength, ReadTime, ViewCount};
pub use profile::{BookingOptions, Profile, SocialLink, SocialPlatform};
pub use project::{Project, ProjectLinks};
pub use skill::{Proficiency, SkillDetail, SkillIcon, SkillProject, SkillSummary};
