//! Command-line argument parsing
//!
//! Supports:
//! - Listing installed VS Code themes as a grid
//! - Converting a theme (by name or `.json` path) to a Studio command

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Convert VS Code themes into Roblox Studio Script Editor themes
#[derive(Parser, Debug)]
#[command(
    name = "vscode-studio-theme",
    version,
    about = "Convert VS Code themes into Roblox Studio Script Editor themes"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List installed VS Code themes
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Number of columns in the grid
        #[arg(long, value_name = "N")]
        columns: Option<usize>,
    },
    /// Generate a Studio command bar snippet for a theme
    Convert {
        /// Installed theme name (e.g. "Monokai") or path to a theme .json file
        #[arg(value_name = "THEME")]
        theme: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Write the command to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also copy the command to the clipboard
        #[arg(short, long)]
        copy: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// VS Code extensions directory (default: ~/.vscode/extensions)
    #[arg(long, value_name = "DIR")]
    pub extensions_dir: Option<PathBuf>,
}
