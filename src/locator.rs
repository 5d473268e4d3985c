//! Locating installed VS Code themes
//!
//! Scans `~/.vscode/extensions/` (or a configured directory) for extension
//! manifests that contribute color themes. The scan is best-effort: an
//! extension whose `package.json` is missing or broken contributes nothing
//! and the scan moves on.

use std::path::{Component, Path, PathBuf};

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::theme::THEME_FILE_EXTENSION;

/// Manifest file name inside each extension directory
const MANIFEST_FILE: &str = "package.json";

/// An installed theme discovered during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    /// Display label from the manifest (e.g. "Dark+")
    pub name: String,
    /// Absolute path to the theme file
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    contributes: Option<Contributes>,
}

#[derive(Debug, Deserialize)]
struct Contributes {
    #[serde(default)]
    themes: Option<Vec<ThemeContribution>>,
}

#[derive(Debug, Deserialize)]
struct ThemeContribution {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    path: Option<String>,
}

/// `~/.vscode/extensions/`
pub fn default_extensions_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".vscode").join("extensions"))
}

/// Resolve a theme name or file path to the theme file
///
/// Arguments ending in `.json` are returned unchanged without touching the
/// filesystem. Otherwise the installed themes are scanned and the first one
/// whose label matches case-insensitively wins; `Ok(None)` if none does.
pub fn resolve(theme: &str, extensions_dir: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = literal_path(theme) {
        return Ok(Some(path));
    }

    let themes = available_themes(extensions_dir)?;
    Ok(find_by_name(&themes, theme).map(|found| {
        tracing::info!("Resolved theme '{}' to {}", theme, found.path.display());
        found.path.clone()
    }))
}

/// The theme argument as a file path, if it names a `.json` file
pub fn literal_path(theme: &str) -> Option<PathBuf> {
    theme
        .ends_with(THEME_FILE_EXTENSION)
        .then(|| PathBuf::from(theme))
}

/// Case-insensitive exact match on the display label
pub fn find_by_name<'a>(themes: &'a [ThemeDescriptor], name: &str) -> Option<&'a ThemeDescriptor> {
    let name = name.to_lowercase();
    themes.iter().find(|theme| theme.name.to_lowercase() == name)
}

/// List every theme contributed by extensions under `extensions_dir`
///
/// Order follows directory iteration and is not guaranteed to be stable
/// across platforms.
pub fn available_themes(extensions_dir: &Path) -> Result<Vec<ThemeDescriptor>> {
    let entries =
        std::fs::read_dir(extensions_dir).map_err(|source| ConvertError::ExtensionsDir {
            path: extensions_dir.to_path_buf(),
            source,
        })?;

    let mut themes = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let extension_dir = entry.path();
        if !extension_dir.is_dir() {
            continue;
        }
        if let Some(contributed) = read_extension_themes(&extension_dir) {
            themes.extend(contributed);
        }
    }

    tracing::debug!(
        "Found {} themes in {}",
        themes.len(),
        extensions_dir.display()
    );
    Ok(themes)
}

/// Themes contributed by one extension, or None if its manifest is unusable
fn read_extension_themes(extension_dir: &Path) -> Option<Vec<ThemeDescriptor>> {
    let manifest_path = extension_dir.join(MANIFEST_FILE);
    let content = match std::fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", manifest_path.display(), e);
            return None;
        }
    };
    let manifest: Manifest = match json5::from_str(&content) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", manifest_path.display(), e);
            return None;
        }
    };

    let contributions = manifest.contributes?.themes?;
    Some(
        contributions
            .into_iter()
            .filter_map(|theme| {
                Some(ThemeDescriptor {
                    name: theme.label?,
                    path: normalize(&extension_dir.join(theme.path?)),
                })
            })
            .collect(),
    )
}

/// Lexically remove `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Installed theme names closest to `query`, best first
pub fn suggest<'a>(query: &str, themes: &'a [ThemeDescriptor], limit: usize) -> Vec<&'a str> {
    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(Config::DEFAULT);
    let mut buf = Vec::new();

    let mut scored: Vec<(u32, &str)> = themes
        .iter()
        .filter_map(|theme| {
            let haystack = Utf32Str::new(&theme.name, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| (score, theme.name.as_str()))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name)
        .collect()
}
