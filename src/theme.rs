//! VS Code theme documents
//!
//! Theme files are JSON with comments and trailing commas, so they are parsed
//! with `json5`. Only `colors` and `tokenColors` are read; everything else
//! in the file is ignored.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, Result};

/// File extension that marks a theme argument as a literal path
pub const THEME_FILE_EXTENSION: &str = ".json";

/// Parsed VS Code color theme
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeDocument {
    /// Workbench colors keyed by VS Code UI key (e.g. "editor.background")
    #[serde(default)]
    pub colors: HashMap<String, Option<String>>,
    /// TextMate token styles in document order
    #[serde(default, rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
}

/// A single `tokenColors` entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenColor {
    /// None for the global/default token style
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default)]
    pub settings: TokenSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenSettings {
    #[serde(default)]
    pub foreground: Option<String>,
}

/// A token entry's scope: either one scope string or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scope {
    One(String),
    Many(Vec<String>),
}

impl Scope {
    /// Every scope string this entry applies to
    pub fn names(&self) -> &[String] {
        match self {
            Scope::One(name) => std::slice::from_ref(name),
            Scope::Many(names) => names,
        }
    }
}

impl TokenColor {
    /// Foreground color, treating an empty string as unset
    pub fn foreground(&self) -> Option<&str> {
        self.settings
            .foreground
            .as_deref()
            .filter(|color| !color.is_empty())
    }

    pub fn is_global(&self) -> bool {
        self.scope.is_none()
    }
}

impl ThemeDocument {
    /// Parse a theme from JSON5 text
    pub fn from_json5(source: &str) -> std::result::Result<Self, json5::Error> {
        json5::from_str(source)
    }

    /// Load a theme document from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConvertError::ThemeRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json5(&content).map_err(|e| ConvertError::ThemeParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Workbench color for a UI key, treating an empty string as unset
    pub fn color(&self, key: &str) -> Option<&str> {
        self.colors
            .get(key)
            .and_then(|value| value.as_deref())
            .filter(|color| !color.is_empty())
    }

    /// The first token style without a scope, if any
    pub fn global_token_color(&self) -> Option<&TokenColor> {
        self.token_colors.iter().find(|token| token.is_global())
    }
}
