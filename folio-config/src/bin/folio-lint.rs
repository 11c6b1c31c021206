use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use folio_config::{ConfigSource, FileCatalogSource, SiteConfig, load_catalog};
use folio_core::catalog::{Catalog, ContentSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-lint", about = "Validate Folio site configuration and content")]
struct Cli {
    /// Site config file. Defaults to the normal lookup order.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Catalog file. Overrides `content.catalog_path`.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let (config, source) = match &cli.config {
        Some(path) => (SiteConfig::load_from_file(path)?, ConfigSource::File(path.clone())),
        None => SiteConfig::load_from_env()?,
    };
    println!("config: {}", describe_source(&source));
    let carousel = config.carousel.to_config()?;
    println!(
        "  carousel: autoplay={} interval={:?} debounce={:?} animation={:?} easing={:?}",
        carousel.autoplay,
        carousel.autoplay_interval,
        carousel.snap_debounce,
        carousel.animation,
        carousel.easing
    );
    println!("  window: {}x{}", config.window.width, config.window.height);

    let catalog = match &cli.catalog {
        Some(path) => {
            let source = FileCatalogSource::new(path);
            println!("catalog: {}", source.describe());
            source.load()?
        }
        None => {
            let catalog = load_catalog(&config)?;
            match &config.content.catalog_path {
                Some(path) => println!("catalog: {}", path.display()),
                None => println!("catalog: built-in"),
            }
            catalog
        }
    };
    print_summary(&catalog);
    println!("ok");
    Ok(())
}

fn describe_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Default => "defaults".to_string(),
        ConfigSource::EnvPath(path) => format!("{} (from $FOLIO_CONFIG_PATH)", path.display()),
        ConfigSource::EnvInline => "$FOLIO_CONFIG_JSON".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
    }
}

fn print_summary(catalog: &Catalog) {
    println!("  profile: {} ({})", catalog.profile().name, catalog.profile().headline);
    println!(
        "  skills: {} ({} with detail pages, default `{}`)",
        catalog.skills().len(),
        catalog.skill_details().len(),
        catalog.default_skill().slug
    );
    println!(
        "  projects: {} ({} featured)",
        catalog.projects().len(),
        catalog.featured_projects().count()
    );
    println!(
        "  content: {} videos, {} blog posts",
        catalog.videos().len(),
        catalog.blogs().len()
    );
    println!(
        "  booking: {} purposes, {} time windows",
        catalog.booking().purposes.len(),
        catalog.booking().time_windows.len()
    );
}
