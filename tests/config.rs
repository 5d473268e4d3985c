//! Configuration system tests
//!
//! Tests for config paths and converter config loading.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use vscode_studio_theme::config::ConverterConfig;
use vscode_studio_theme::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("vscode-studio-theme"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

#[test]
fn test_ensure_logs_dir_creates_missing_parents() {
    let dir = tempdir().expect("Failed to create temp dir");
    let base = dir.path().join("nested").join("vscode-studio-theme");

    let logs = config_paths::ensure_logs_dir_in(&base).unwrap();
    assert_eq!(logs, base.join("logs"));
    assert!(logs.is_dir());
    // Second call is a no-op
    assert_eq!(config_paths::ensure_logs_dir_in(&base).unwrap(), logs);
}

#[test]
fn test_ensure_logs_dir_reports_blocked_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let base = dir.path().join("not-a-dir");
    fs::write(&base, "file in the way").unwrap();

    let err = config_paths::ensure_logs_dir_in(&base).unwrap_err();
    assert!(err.to_string().contains("Failed to create log directory"));
}

// ========================================================================
// Converter Config Tests
// ========================================================================

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = ConverterConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(config, ConverterConfig::default());
}

#[test]
fn test_load_full_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "extensions_dir: /opt/vscode/extensions\ncolumns: 5\ncopy_to_clipboard: true\n",
    )
    .unwrap();

    let config = ConverterConfig::load_from(&path);
    assert_eq!(
        config.extensions_dir,
        Some(PathBuf::from("/opt/vscode/extensions"))
    );
    assert_eq!(config.columns, 5);
    assert!(config.copy_to_clipboard);
}

#[test]
fn test_load_invalid_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, "columns: [not, a, number]\n").unwrap();

    assert_eq!(ConverterConfig::load_from(&path), ConverterConfig::default());
}

#[test]
fn test_config_serialize_deserialize() {
    let config = ConverterConfig {
        extensions_dir: Some(PathBuf::from("/ext")),
        columns: 2,
        copy_to_clipboard: true,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: ConverterConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}
