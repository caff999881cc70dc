//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: environment variables are process-global.

use std::path::PathBuf;

use tempfile::TempDir;

use coursecat::config::{local_config_path, Settings};

#[test]
fn given_env_vars_when_load_then_override_all_file_layers() {
    let local_dir = TempDir::new().unwrap();
    std::fs::write(
        local_config_path(local_dir.path()),
        "catalog_file = \"local.csv\"\nmax_prerequisites = 5\n",
    )
    .unwrap();

    std::env::set_var("COURSECAT_CATALOG_FILE", "/env/catalog.csv");
    std::env::set_var("COURSECAT_MAX_PREREQUISITES", "4");

    let settings = Settings::load_from(None, Some(local_dir.path())).expect("load settings");

    std::env::remove_var("COURSECAT_CATALOG_FILE");
    std::env::remove_var("COURSECAT_MAX_PREREQUISITES");

    assert_eq!(settings.catalog_file, PathBuf::from("/env/catalog.csv"));
    assert_eq!(settings.max_prerequisites, 4);
}
