pub mod carousel;
pub mod site;

pub use carousel::CarouselSettings;
pub use site::{
    CONFIG_JSON_VAR, CONFIG_PATH_VAR, ConfigSource, ContentSettings, LogSettings, SiteConfig,
    WindowSettings,
};
