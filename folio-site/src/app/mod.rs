use iced::{Settings, Size, Theme};

use folio_core::navigation::View;

use crate::state::State;
use crate::theme::FolioTheme;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Load content, then run the Folio window until it is closed.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let window = Size::new(config.site.window.width, config.site.window.height);
    let catalog = config.catalog()?;
    let state = bootstrap::base_state(&config, catalog)?;

    iced::application(title, update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window_size(window)
        .run_with(move || bootstrap::runtime_boot(state))?;
    Ok(())
}

fn default_settings() -> Settings {
    Settings {
        id: Some("folio-site".to_string()),
        antialiasing: true,
        ..Settings::default()
    }
}

fn title(state: &State) -> String {
    match state.shell.resolve(&state.catalog) {
        View::Home(_) => {
            let profile = state.catalog.profile();
            format!("{} | {}", profile.name, profile.headline)
        }
        View::Skill(page) => format!("{} | {}", page.name(), state.catalog.profile().name),
    }
}

fn app_theme(_: &State) -> Theme {
    FolioTheme::theme()
}
