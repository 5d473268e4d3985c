//! Integration tests for discovering installed themes

mod common;

use std::fs;
use std::path::PathBuf;

use common::{write_extension, SAMPLE_THEME};
use tempfile::tempdir;
use vscode_studio_theme::locator::{available_themes, resolve};
use vscode_studio_theme::ConvertError;

#[test]
fn test_scan_collects_contributed_themes() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ext = write_extension(
        dir.path(),
        "acme.themes-1.0.0",
        &[
            ("Acme Dark", "./themes/dark.json", SAMPLE_THEME),
            ("Acme Light", "themes/light.json", SAMPLE_THEME),
        ],
    );

    let mut themes = available_themes(dir.path()).unwrap();
    themes.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(themes.len(), 2);
    assert_eq!(themes[0].name, "Acme Dark");
    assert_eq!(themes[0].path, ext.join("themes").join("dark.json"));
    assert_eq!(themes[1].path, ext.join("themes").join("light.json"));
    assert!(themes[0].path.is_file());
}

#[test]
fn test_scan_skips_broken_and_unrelated_extensions() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_extension(dir.path(), "good", &[("Good", "good.json", SAMPLE_THEME)]);

    // No manifest at all
    fs::create_dir_all(dir.path().join("no-manifest")).unwrap();
    // Unparseable manifest
    fs::create_dir_all(dir.path().join("broken")).unwrap();
    fs::write(dir.path().join("broken/package.json"), "{ not json").unwrap();
    // Manifest without contributes
    fs::create_dir_all(dir.path().join("language-pack")).unwrap();
    fs::write(
        dir.path().join("language-pack/package.json"),
        r#"{ "name": "language-pack" }"#,
    )
    .unwrap();
    // Contributes something other than themes
    fs::create_dir_all(dir.path().join("snippets")).unwrap();
    fs::write(
        dir.path().join("snippets/package.json"),
        r#"{ "contributes": { "snippets": [] } }"#,
    )
    .unwrap();
    // Stray file at the top level
    fs::write(dir.path().join(".obsolete"), "{}").unwrap();

    let themes = available_themes(dir.path()).unwrap();
    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].name, "Good");
}

#[test]
fn test_scan_skips_entries_without_label() {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::create_dir_all(dir.path().join("partial")).unwrap();
    fs::write(
        dir.path().join("partial/package.json"),
        r#"{ "contributes": { "themes": [
            { "path": "a.json" },
            { "label": "Labelled", "path": "b.json" }
        ] } }"#,
    )
    .unwrap();

    let themes = available_themes(dir.path()).unwrap();
    assert_eq!(themes.len(), 1);
    assert_eq!(themes[0].name, "Labelled");
}

#[test]
fn test_scan_of_missing_root_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = available_themes(&dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, ConvertError::ExtensionsDir { .. }));
}

#[test]
fn test_resolve_by_name_ignores_case() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ext = write_extension(
        dir.path(),
        "acme",
        &[("Acme Dark", "themes/dark.json", SAMPLE_THEME)],
    );

    let resolved = resolve("acme DARK", dir.path()).unwrap();
    assert_eq!(resolved, Some(ext.join("themes").join("dark.json")));
}

#[test]
fn test_resolve_unknown_name_is_none() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_extension(dir.path(), "acme", &[("Acme Dark", "dark.json", SAMPLE_THEME)]);

    assert_eq!(resolve("Acme", dir.path()).unwrap(), None);
}

#[test]
fn test_resolve_literal_path_skips_scan() {
    let dir = tempdir().expect("Failed to create temp dir");
    let missing_root = dir.path().join("does-not-exist");

    let resolved = resolve("themes/custom.json", &missing_root).unwrap();
    assert_eq!(resolved, Some(PathBuf::from("themes/custom.json")));
}
