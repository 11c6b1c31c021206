use std::fs;
use std::sync::Mutex;

use folio_config::models::{CONFIG_JSON_VAR, CONFIG_PATH_VAR};
use folio_config::{ConfigSource, FileCatalogSource, SiteConfig, content_source, load_catalog};
use folio_core::catalog::{Catalog, ContentSource, SourceError};
use once_cell::sync::Lazy;
use tempfile::tempdir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn clear_overrides() {
    for key in [CONFIG_PATH_VAR, CONFIG_JSON_VAR] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn defaults_when_nothing_is_configured() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");

    let (config, source) = SiteConfig::load_from_env_in(dir.path()).expect("defaults load");
    assert_eq!(source, ConfigSource::Default);
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn precedence_is_path_then_inline_then_files() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");

    fs::create_dir(dir.path().join("config")).expect("config dir");
    let nested = dir.path().join("config/folio.json");
    fs::write(&nested, r#"{"window": {"width": 1000, "height": 700}}"#).expect("write json");
    let (config, source) = SiteConfig::load_from_env_in(dir.path()).expect("nested file");
    assert_eq!(source, ConfigSource::File(nested));
    assert_eq!(config.window.width, 1000.0);

    let top = dir.path().join("folio.toml");
    fs::write(&top, "[window]\nwidth = 1100.0\nheight = 700.0\n").expect("write toml");
    let (config, source) = SiteConfig::load_from_env_in(dir.path()).expect("top file");
    assert_eq!(source, ConfigSource::File(top));
    assert_eq!(config.window.width, 1100.0);

    unsafe { std::env::set_var(CONFIG_JSON_VAR, r#"{"carousel": {"autoplay": false}}"#) };
    let (config, source) = SiteConfig::load_from_env_in(dir.path()).expect("inline json");
    assert_eq!(source, ConfigSource::EnvInline);
    assert!(!config.carousel.autoplay);

    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "[carousel]\nanimation_ms = 300\n").expect("write explicit");
    unsafe { std::env::set_var(CONFIG_PATH_VAR, &explicit) };
    let (config, source) = SiteConfig::load_from_env_in(dir.path()).expect("env path");
    assert_eq!(source, ConfigSource::EnvPath(explicit));
    assert_eq!(config.carousel.animation_ms, 300);
    assert!(config.carousel.autoplay);

    clear_overrides();
}

#[test]
fn broken_env_config_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_overrides();
    let dir = tempdir().expect("tempdir");

    unsafe { std::env::set_var(CONFIG_JSON_VAR, "{ not json") };
    let err = SiteConfig::load_from_env_in(dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains(CONFIG_JSON_VAR));

    clear_overrides();
}

#[test]
fn catalog_files_load_from_json_and_toml() {
    let dir = tempdir().expect("tempdir");

    let json_path = dir.path().join("catalog.json");
    let builtin = Catalog::builtin().expect("builtin");
    fs::write(&json_path, serde_json::to_string_pretty(&builtin).expect("serialize"))
        .expect("write catalog");
    let loaded = FileCatalogSource::new(&json_path).load().expect("json catalog");
    assert_eq!(loaded, builtin);

    let toml_path = dir.path().join("catalog.toml");
    fs::write(
        &toml_path,
        r#"
default_skill = "rust"

[profile]
name = "Casey Morgan"
headline = "Systems Engineer"

[[skills]]
name = "Rust"
description = "Systems programming"
icon = "terminal"
project_count = 4

[[skill_details]]
slug = "Rust"
name = "Rust"
description = "Memory-safe systems language"
level = "advanced"
experience = "3 years"
"#,
    )
    .expect("write toml catalog");

    let mut config = SiteConfig::default();
    config.content.catalog_path = Some(toml_path);
    let catalog = load_catalog(&config).expect("toml catalog");
    assert_eq!(catalog.profile().name, "Casey Morgan");
    assert_eq!(catalog.default_skill().slug.as_str(), "rust");
    assert!(catalog.projects().is_empty());
}

#[test]
fn invalid_catalog_files_report_their_origin() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"{"profile": {"name": "A", "headline": "B"}, "skill_details": []}"#)
        .expect("write");

    match FileCatalogSource::new(&path).load() {
        Err(SourceError::Parse { origin, message }) => {
            assert!(origin.ends_with("catalog.json"));
            assert!(message.contains("no skill details"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }

    let missing = FileCatalogSource::new(dir.path().join("missing.toml"));
    assert!(matches!(missing.load(), Err(SourceError::Io { .. })));
}

#[test]
fn builtin_source_is_used_without_a_catalog_path() {
    let source = content_source(&SiteConfig::default());
    assert_eq!(source.describe(), "built-in catalog");
    assert!(source.load().is_ok());
}
