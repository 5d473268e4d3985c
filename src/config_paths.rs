//! Centralized configuration paths for vscode-studio-theme
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/vscode-studio-theme/`
//! - Windows: `%APPDATA%\vscode-studio-theme\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

const APP_DIR: &str = "vscode-studio-theme";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/vscode-studio-theme`
///   - Else: `~/.config/vscode-studio-theme`
///
/// Windows:
///   - `%APPDATA%\vscode-studio-theme`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/vscode-studio-theme/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/vscode-studio-theme/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create `logs/` under the config directory, returning it
pub fn ensure_logs_dir() -> anyhow::Result<PathBuf> {
    let base = config_dir().context("No config directory available")?;
    ensure_logs_dir_in(&base)
}

/// Create `logs/` under `base`, returning it
pub fn ensure_logs_dir_in(base: &Path) -> anyhow::Result<PathBuf> {
    let logs = base.join("logs");
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create log directory {}", logs.display()))?;
    Ok(logs)
}
