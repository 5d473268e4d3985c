use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use vscode_studio_theme::cli::{CliArgs, CliCommand, SourceArgs};
use vscode_studio_theme::config::ConverterConfig;
use vscode_studio_theme::{clipboard, command, locator, table};

/// How many "did you mean" names to offer for an unknown theme
const MAX_SUGGESTIONS: usize = 3;

fn main() -> Result<()> {
    vscode_studio_theme::tracing::init();

    let args = CliArgs::parse();
    let config = ConverterConfig::load();

    match args.command {
        CliCommand::List { source, columns } => {
            list_themes(&config, &source, columns.unwrap_or(config.columns))
        }
        CliCommand::Convert {
            theme,
            source,
            output,
            copy,
        } => convert_theme(
            &config,
            &source,
            &theme,
            output.as_deref(),
            copy || config.copy_to_clipboard,
        ),
    }
}

fn extensions_dir(config: &ConverterConfig, source: &SourceArgs) -> Result<PathBuf> {
    config
        .extensions_dir(source.extensions_dir.as_deref())
        .context("Could not determine the VS Code extensions directory (no home directory)")
}

fn list_themes(config: &ConverterConfig, source: &SourceArgs, columns: usize) -> Result<()> {
    let dir = extensions_dir(config, source)?;
    let mut names: Vec<String> = locator::available_themes(&dir)?
        .into_iter()
        .map(|theme| theme.name)
        .collect();

    if names.is_empty() {
        println!("No themes found in {}", dir.display());
        return Ok(());
    }

    names.sort_by_key(|name| name.to_lowercase());
    table::print_grid(&names, columns);
    Ok(())
}

fn convert_theme(
    config: &ConverterConfig,
    source: &SourceArgs,
    theme: &str,
    output: Option<&Path>,
    copy: bool,
) -> Result<()> {
    let theme_file = match locator::literal_path(theme) {
        Some(path) => path,
        None => find_installed_theme(config, source, theme)?,
    };

    let result = command::convert(&theme_file)
        .with_context(|| format!("Failed to convert {}", theme_file.display()))?;

    match output {
        Some(path) => {
            std::fs::write(path, &result.script)
                .with_context(|| format!("Failed to write command to {}", path.display()))?;
            eprintln!("Wrote Studio command to {}", path.display());
        }
        None => println!("{}", result.script),
    }

    if !result.missing.is_empty() {
        eprintln!(
            "\nThe following colors could not be mapped and need to be set manually:"
        );
        for name in &result.missing {
            eprintln!("  - {}", name);
        }
    }

    // Last, since on Linux this blocks until the clipboard changes hands
    if copy {
        if clipboard::BLOCKS_UNTIL_REPLACED {
            eprintln!(
                "Copying Studio command to clipboard; it stays available until something else is copied (Ctrl+C to stop)"
            );
        }
        match clipboard::copy(&result.script) {
            Ok(()) => eprintln!("Copied Studio command to clipboard"),
            Err(e) => tracing::warn!("Failed to copy command to clipboard: {}", e),
        }
    }

    Ok(())
}

fn find_installed_theme(
    config: &ConverterConfig,
    source: &SourceArgs,
    theme: &str,
) -> Result<PathBuf> {
    let dir = extensions_dir(config, source)?;
    let Some(theme_file) = locator::resolve(theme, &dir)? else {
        let installed = locator::available_themes(&dir)?;
        let suggestions = locator::suggest(theme, &installed, MAX_SUGGESTIONS);
        if suggestions.is_empty() {
            bail!("No installed theme named '{}'", theme);
        }
        bail!(
            "No installed theme named '{}'. Did you mean: {}?",
            theme,
            suggestions.join(", ")
        );
    };

    Ok(theme_file)
}
