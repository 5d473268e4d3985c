//! Error types for theme conversion
//!
//! Only conditions that abort an operation live here. A theme that cannot be
//! found is `Ok(None)`, a broken extension manifest is skipped during the
//! scan, and unmapped colors are reported as data alongside the command.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a conversion or a theme scan
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read theme file {}: {source}", .path.display())]
    ThemeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse theme file {}: {message}", .path.display())]
    ThemeParse { path: PathBuf, message: String },

    #[error("Invalid color format: {value}")]
    MalformedColor { value: String },

    #[error("Failed to read extensions directory {}: {source}", .path.display())]
    ExtensionsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize theme colors: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
