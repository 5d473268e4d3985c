//! Converter configuration
//!
//! Read from `~/.config/vscode-studio-theme/config.yaml`. Every field is
//! optional; command-line flags take precedence over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::table::DEFAULT_COLUMNS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Where VS Code extensions are installed (default: `~/.vscode/extensions`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions_dir: Option<PathBuf>,
    /// Columns in the `list` grid
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Also copy generated commands to the clipboard
    #[serde(default)]
    pub copy_to_clipboard: bool,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            extensions_dir: None,
            columns: default_columns(),
            copy_to_clipboard: false,
        }
    }
}

impl ConverterConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Extensions directory to scan: explicit override, then config, then default
    pub fn extensions_dir(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.extensions_dir.clone())
            .or_else(crate::locator::default_extensions_dir)
    }
}
