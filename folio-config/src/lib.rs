//! Configuration and content loading for Folio.
//!
//! Site settings come from `FOLIO_CONFIG_PATH`, `FOLIO_CONFIG_JSON` or a
//! `folio.toml`/`folio.json` in the working directory, in that order. The
//! content catalog is either the built-in one or a file named by
//! `content.catalog_path`.

pub mod error;
pub mod models;
pub mod sources;

pub use error::ConfigError;
pub use models::{CarouselSettings, ConfigSource, SiteConfig};
pub use sources::{FileCatalogSource, content_source, load_catalog};
