//! Collaborators that supply the catalog to the view layer.

use std::fmt;

use super::{Catalog, SourceError};

/// Loads site content. The view layer only ever sees the resulting
/// [`Catalog`]; where it came from is the source's business.
pub trait ContentSource: fmt::Debug + Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Catalog, SourceError>;
}

/// The content compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl ContentSource for BuiltinSource {
    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }

    fn load(&self) -> Result<Catalog, SourceError> {
        Ok(Catalog::builtin()?)
    }
}

/// An already assembled catalog, e.g. injected by tests or presets.
#[derive(Debug, Clone)]
pub struct StaticSource(pub Catalog);

impl ContentSource for StaticSource {
    fn describe(&self) -> String {
        "static catalog".to_string()
    }

    fn load(&self) -> Result<Catalog, SourceError> {
        Ok(self.0.clone())
    }
}
