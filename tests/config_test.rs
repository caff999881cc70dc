//! Integration tests for Settings config loading with layered precedence.
//!
//! These tests pass explicit global config paths (temp directories only),
//! so they never read the user's real global config.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use coursecat::application::ApplicationError;
use coursecat::config::{local_config_path, Settings, DEFAULT_CATALOG_FILE};

#[test]
fn given_no_config_files_when_load_then_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let settings = Settings::load_from(None, Some(temp.path())).expect("load settings");

    assert_eq!(settings.catalog_file, PathBuf::from(DEFAULT_CATALOG_FILE));
    assert_eq!(settings.max_prerequisites, 2);
}

#[test]
fn given_global_config_when_load_then_overrides_defaults() {
    let global_dir = TempDir::new().unwrap();
    let global_path = global_dir.path().join("coursecat.toml");
    fs::write(&global_path, "catalog_file = \"/data/courses.csv\"\n").unwrap();

    let settings = Settings::load_from(Some(&global_path), None).expect("load settings");

    assert_eq!(settings.catalog_file, PathBuf::from("/data/courses.csv"));
    assert_eq!(settings.max_prerequisites, 2);
}

#[test]
fn given_local_config_when_load_then_overrides_global_field_by_field() {
    let global_dir = TempDir::new().unwrap();
    let global_path = global_dir.path().join("coursecat.toml");
    fs::write(
        &global_path,
        "catalog_file = \"/data/courses.csv\"\nmax_prerequisites = 3\n",
    )
    .unwrap();

    let local_dir = TempDir::new().unwrap();
    fs::write(local_config_path(local_dir.path()), "max_prerequisites = 5\n").unwrap();

    let settings =
        Settings::load_from(Some(&global_path), Some(local_dir.path())).expect("load settings");

    assert_eq!(settings.catalog_file, PathBuf::from("/data/courses.csv"));
    assert_eq!(settings.max_prerequisites, 5);
}

#[test]
fn given_invalid_toml_when_load_then_returns_config_error() {
    let local_dir = TempDir::new().unwrap();
    fs::write(local_config_path(local_dir.path()), "max_prerequisites = \"many\"\n").unwrap();

    let result = Settings::load_from(None, Some(local_dir.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_unknown_key_when_load_then_returns_config_error() {
    let local_dir = TempDir::new().unwrap();
    fs::write(local_config_path(local_dir.path()), "catalog = \"x.csv\"\n").unwrap();

    let result = Settings::load_from(None, Some(local_dir.path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_template_written_as_local_config_when_load_then_uses_defaults() {
    let local_dir = TempDir::new().unwrap();
    fs::write(local_config_path(local_dir.path()), Settings::template()).unwrap();

    let settings = Settings::load_from(None, Some(local_dir.path())).expect("load settings");

    assert_eq!(settings, Settings::default());
}
