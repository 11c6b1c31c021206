use folio_model::{ProjectId, SkillSlug};
use thiserror::Error;

/// Integrity problems found while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog defines no skill details")]
    NoSkillDetails,

    #[error("default skill `{0}` has no detail entry")]
    MissingDefaultSkill(SkillSlug),

    #[error("duplicate project id {0}")]
    DuplicateProjectId(ProjectId),

    #[error("duplicate skill `{0}`")]
    DuplicateSkill(SkillSlug),

    #[error("invalid {field} url `{url}`")]
    InvalidLink { field: String, url: String },
}

/// Failures of a [`ContentSource`](super::ContentSource).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read catalog from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}
