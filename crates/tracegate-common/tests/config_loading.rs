//! ---
//! tg_section: "01-core-functionality"
//! tg_subsection: "module"
//! tg_type: "source"
//! tg_scope: "code"
//! tg_description: "Shared primitives and utilities for the access runtime."
//! tg_version: "v0.0.0-prealpha"
//! tg_owner: "tbd"
//! ---
use std::fs;

use tempfile::tempdir;
use tracegate_common::config::AppConfig;
use tracegate_common::logging::{init_tracing, LogFormat};
use tracegate_common::LoggingConfig;

#[test]
fn first_existing_candidate_wins() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let present = dir.path().join("tracegate.toml");
    fs::write(
        &present,
        "[access]\ncache_capacity = 32\nwarn_on_fallback = false\n",
    )
    .unwrap();

    let loaded = AppConfig::load_with_source(&[missing, present.clone()]).unwrap();
    assert_eq!(loaded.source, present);
    assert_eq!(loaded.config.access.cache_capacity, 32);
    assert!(!loaded.config.access.warn_on_fallback);
}

#[test]
fn missing_candidates_are_reported() {
    let dir = tempdir().unwrap();
    let err = AppConfig::load(&[dir.path().join("nope.toml")]).unwrap_err();
    assert!(err.to_string().contains("no configuration files found"));
}

#[test]
fn missing_candidates_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = AppConfig::load_or_default(&[dir.path().join("nope.toml")]).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn invalid_file_surfaces_path_in_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[access]\ncache_capacity = 0\n").unwrap();
    let err = AppConfig::load(&[path.clone()]).unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("cache_capacity"));
    assert!(rendered.contains(&path.display().to_string()));
}

#[test]
fn tracing_initialises_into_log_directory() {
    let dir = tempdir().unwrap();
    let config = LoggingConfig {
        directory: dir.path().join("logs"),
        format: LogFormat::Pretty,
        file_prefix: Some("tracegate-test".into()),
        level: "debug".into(),
    };
    let guard = init_tracing("config-loading", &config).unwrap();
    assert!(config.directory.is_dir());
    assert_eq!(guard.log_file(), &config.directory.join("tracegate-test.log"));
    drop(guard);
    let written = fs::read_dir(&config.directory)
        .unwrap()
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("tracegate-test.log"));
    assert!(written);
}
