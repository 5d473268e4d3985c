//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// A small but realistic dark theme, with comments and trailing commas
pub const SAMPLE_THEME: &str = r##"{
    // Sample dark theme
    "name": "Sample Dark",
    "type": "dark",
    "colors": {
        "editor.background": "#1E1E1E",
        "editor.foreground": "#D4D4D4",
        "editor.selectionBackground": "#264F78",
        "editor.lineHighlightBackground": "#2A2A2A80",
        "editorError.foreground": "#F48771",
    },
    "tokenColors": [
        { "settings": { "foreground": "#D4D4D4" } },
        { "scope": "comment", "settings": { "foreground": "#6A9955", "fontStyle": "italic" } },
        { "scope": ["string", "string.quoted"], "settings": { "foreground": "#CE9178" } },
        { "scope": "keyword", "settings": { "foreground": "#569CD6" } },
        { "scope": "keyword.operator", "settings": { "foreground": "#D4D4D4" } },
        { "scope": "constant.numeric", "settings": { "foreground": "#B5CEA8" } },
        { "scope": "keyword", "settings": { "foreground": "#C586C0" } },
    ],
}"##;

/// Create an extension directory with a manifest contributing the given
/// `(label, relative path, theme json)` entries
pub fn write_extension(root: &Path, name: &str, themes: &[(&str, &str, &str)]) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("Failed to create extension dir");

    let contributions: Vec<String> = themes
        .iter()
        .map(|(label, path, _)| {
            format!(
                r#"{{ "label": "{}", "uiTheme": "vs-dark", "path": "{}" }}"#,
                label, path
            )
        })
        .collect();
    let manifest = format!(
        r#"{{
    "name": "{}",
    "contributes": {{
        "themes": [{}],
    }},
}}"#,
        name,
        contributions.join(", ")
    );
    fs::write(dir.join("package.json"), manifest).expect("Failed to write manifest");

    for (_, path, json) in themes {
        let theme_path = dir.join(path);
        if let Some(parent) = theme_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create theme dir");
        }
        fs::write(theme_path, json).expect("Failed to write theme");
    }

    dir
}
