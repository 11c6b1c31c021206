use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::carousel::CarouselSettings;
use crate::error::ConfigError;

pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "FOLIO_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "folio.toml",
    "folio.json",
    "config/folio.toml",
    "config/folio.json",
];

/// Source that produced the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// `[content]` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentSettings {
    /// TOML or JSON catalog document. The built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

/// `[window]` table, in logical pixels.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl WindowSettings {
    pub const MIN_WIDTH: f32 = 320.0;
    pub const MIN_HEIGHT: f32 = 240.0;
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
        }
    }
}

/// `[logging]` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// `env_logger` filter used when `RUST_LOG` is not set, e.g.
    /// `"warn,folio_site=debug"`.
    pub filter: Option<String>,
}

/// Everything the site reads at startup. Every table is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselSettings,
    pub content: ContentSettings,
    pub window: WindowSettings,
    pub logging: LogSettings,
}

impl SiteConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$FOLIO_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$FOLIO_CONFIG_JSON` (inline JSON),
    /// 3) the first of `folio.toml`, `folio.json`, `config/folio.toml`,
    ///    `config/folio.json` in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_from_env_in(Path::new("."))
    }

    /// [`load_from_env`](Self::load_from_env) with default files looked up
    /// under `dir`.
    pub fn load_from_env_in(dir: &Path) -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed =
                Self::parse_json(&raw).with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(dir) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        debug!("no site config found, using defaults");
        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read site config from {}", path.display()))?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid site config {}", path.display()))?,
            Some("toml") => toml::from_str(&contents)
                .map_err(|err| anyhow!("invalid site config {}: {}", path.display(), err))?,
            _ => Self::parse_from_str(&contents, &path.display().to_string())?,
        };

        config
            .validate()
            .with_context(|| format!("invalid site config {}", path.display()))?;
        Ok(config)
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        let config: Self = toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse site config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| anyhow!("invalid site config json: {err}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.carousel.to_config()?;

        if self.window.width < WindowSettings::MIN_WIDTH
            || self.window.height < WindowSettings::MIN_HEIGHT
        {
            return Err(ConfigError::WindowTooSmall {
                width: self.window.width,
                height: self.window.height,
                min_width: WindowSettings::MIN_WIDTH,
                min_height: WindowSettings::MIN_HEIGHT,
            });
        }

        if self
            .content
            .catalog_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::EmptyCatalogPath);
        }
        Ok(())
    }

    /// First existing default config file under `dir`.
    pub fn find_default_file(dir: &Path) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.exists())
    }
}
