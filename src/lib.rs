//! VS Code → Roblox Studio theme converter
//!
//! Finds an installed VS Code color theme, maps its editor and token colors
//! onto Studio's Script Editor settings, and renders a Luau command that
//! applies them from the Studio command bar.

pub mod cli;
pub mod clipboard;
pub mod color;
pub mod command;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod extract;
pub mod locator;
pub mod mapping;
pub mod table;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use color::Rgb;
pub use command::{convert, generate, StudioCommand};
pub use config::ConverterConfig;
pub use error::ConvertError;
pub use extract::ConversionResult;
pub use locator::ThemeDescriptor;
pub use theme::ThemeDocument;
