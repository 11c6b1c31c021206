use thiserror::Error;

/// Errors produced by model constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid view count `{0}`")]
    InvalidViewCount(String),

    #[error("invalid clip length `{0}` (expected m:ss or h:mm:ss)")]
    InvalidClipLength(String),

    #[error("invalid skill slug `{0}`")]
    InvalidSlug(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
