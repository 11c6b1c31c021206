use anyhow::Context;
use folio_config::{ConfigSource, SiteConfig, load_catalog};
use folio_core::catalog::Catalog;
use folio_core::navigation::NavigationShell;
use iced::{Task, window};

use crate::message::Message;
use crate::state::State;
use crate::update;

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub source: ConfigSource,
    /// Path to open first, e.g. `/skill/docker`.
    pub start_path: Option<String>,
}

impl AppConfig {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site,
            ..Self::default()
        }
    }

    /// Read `.env`, the site configuration and the first CLI argument.
    ///
    /// A broken configuration is logged and replaced by the defaults so the
    /// window still opens.
    pub fn from_environment() -> Self {
        let _ = dotenvy::dotenv();

        let (site, source) = SiteConfig::load_from_env().unwrap_or_else(|err| {
            log::warn!("ignoring site configuration: {err:#}");
            (SiteConfig::default(), ConfigSource::Default)
        });
        log::debug!("site configuration from {source:?}");

        Self {
            site,
            source,
            start_path: std::env::args().nth(1),
        }
    }

    pub fn with_start_path(mut self, path: impl Into<String>) -> Self {
        self.start_path = Some(path.into());
        self
    }

    /// Configured catalog, or the built-in one when it cannot be loaded.
    pub fn catalog(&self) -> anyhow::Result<Catalog> {
        match load_catalog(&self.site) {
            Ok(catalog) => Ok(catalog),
            Err(err) => {
                log::error!("{err:#}; using the built-in catalog");
                Catalog::builtin().context("built-in catalog is invalid")
            }
        }
    }
}

/// Initial state shared by the runtime and tests.
pub fn base_state(config: &AppConfig, catalog: Catalog) -> anyhow::Result<State> {
    let carousel = config
        .site
        .carousel
        .to_config()
        .context("invalid carousel settings")?;
    let shell = match config.start_path.as_deref() {
        Some(path) => NavigationShell::starting_at(path),
        None => NavigationShell::new(),
    };
    Ok(State::new(catalog, shell, carousel))
}

/// Boot closure handed to the iced runtime. The first window size measures
/// the carousel.
pub fn runtime_boot(mut state: State) -> (State, Task<Message>) {
    let measure = window::get_latest()
        .and_then(window::get_size)
        .map(Message::WindowResized);
    let scroll = update::after_navigation(&mut state);

    (state, Task::batch([measure, scroll]))
}
