//! Catalog loading from disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use folio_core::catalog::{BuiltinSource, Catalog, ContentSource, SourceError};
use tracing::info;

use crate::models::SiteConfig;

/// A TOML or JSON catalog document. The format follows the extension;
/// anything else is tried as TOML, then JSON.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, contents: &str) -> Result<Catalog, SourceError> {
        let origin = self.path.display().to_string();
        let parse_error = |message: String| SourceError::Parse {
            origin: origin.clone(),
            message,
        };

        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(contents).map_err(|err| parse_error(err.to_string())),
            Some("toml") => toml::from_str(contents).map_err(|err| parse_error(err.to_string())),
            _ => toml::from_str(contents).or_else(|toml_err| {
                serde_json::from_str(contents).map_err(|json_err| {
                    parse_error(format!("toml error: {toml_err}; json error: {json_err}"))
                })
            }),
        }
    }
}

impl ContentSource for FileCatalogSource {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    fn load(&self) -> Result<Catalog, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        self.parse(&contents)
    }
}

/// The content source a configuration asks for.
pub fn content_source(config: &SiteConfig) -> Box<dyn ContentSource> {
    match &config.content.catalog_path {
        Some(path) => Box::new(FileCatalogSource::new(path)),
        None => Box::new(BuiltinSource),
    }
}

/// Load the configured catalog.
pub fn load_catalog(config: &SiteConfig) -> anyhow::Result<Catalog> {
    let source = content_source(config);
    let catalog = source
        .load()
        .with_context(|| format!("failed to load {}", source.describe()))?;
    info!(
        source = %source.describe(),
        skills = catalog.skills().len(),
        projects = catalog.projects().len(),
        "catalog loaded"
    );
    Ok(catalog)
}
