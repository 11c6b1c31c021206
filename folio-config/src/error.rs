use thiserror::Error;

/// Settings that parse but cannot be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("carousel.{field} must be greater than zero")]
    ZeroDuration { field: &'static str },

    #[error("window size {width}x{height} is below the {min_width}x{min_height} minimum")]
    WindowTooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },

    #[error("content.catalog_path is empty")]
    EmptyCatalogPath,
}
