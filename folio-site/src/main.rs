use folio_site::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger(filter: Option<&str>) {
    let mut builder = Builder::new();
    builder.target(Target::Stdout);
    match filter {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None => {
            builder
                .filter_level(LevelFilter::Warn)
                .filter_module("folio_site", LevelFilter::Debug)
                .filter_module("folio_core", LevelFilter::Info);
        }
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_environment();

    if std::env::var("RUST_LOG").is_err() {
        init_logger(config.site.logging.filter.as_deref());
    } else {
        env_logger::init();
        log::debug!("logger initialized from RUST_LOG");
    }
    log::info!("configuration source: {:?}", config.source);

    app::run(config)
}
