mod support;

use std::path::PathBuf;

use dropout_predictor::app_dirs::{APP_DIR_NAME, app_root_dir, logs_dir};
use dropout_predictor::config::{self, AppSettings, CONFIG_FILE_NAME};
use support::config_env::ConfigHomeGuard;
use tempfile::tempdir;

#[test]
fn config_home_env_relocates_app_directory() {
    let base = tempdir().unwrap();
    let _guard = ConfigHomeGuard::set(base.path().to_path_buf());

    let root = app_root_dir().unwrap();
    assert_eq!(root, base.path().join(APP_DIR_NAME));
    assert!(logs_dir().unwrap().is_dir());
    assert_eq!(config::config_path().unwrap(), root.join(CONFIG_FILE_NAME));
}

#[test]
fn saved_settings_are_loaded_back() {
    let base = tempdir().unwrap();
    let _guard = ConfigHomeGuard::set(base.path().to_path_buf());

    assert_eq!(config::load_or_default().unwrap(), AppSettings::default());

    let mut settings = AppSettings::default();
    settings.model_path = PathBuf::from("custom/model.json");
    settings.window.maximized = true;
    config::save(&settings).unwrap();

    let loaded = config::load_or_default().unwrap();
    assert_eq!(loaded.model_path, PathBuf::from("custom/model.json"));
    assert!(loaded.window.maximized);
}
