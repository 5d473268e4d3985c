//! Color extraction from theme documents
//!
//! Base colors come straight from `colors`. Token colors use two separate
//! rules over `tokenColors`:
//! - building the scope index, later entries overwrite earlier ones for the
//!   same scope (document order)
//! - looking up a target, the first candidate scope present wins (table
//!   priority order), falling back to the global token style

use std::collections::{BTreeMap, HashMap};

use crate::color::Rgb;
use crate::error::Result;
use crate::mapping::{BASE_MAP, TOKEN_SCOPE_MAP};
use crate::theme::ThemeDocument;

/// Target setting name → resolved color
pub type ColorMap = BTreeMap<String, Rgb>;

/// Colors resolved from one table plus the target names that were not
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    pub color_map: ColorMap,
    pub missing: Vec<String>,
}

impl ConversionResult {
    fn resolve(&mut self, target: &str, hex: Option<&str>) -> Result<()> {
        match hex {
            Some(hex) => {
                self.color_map.insert(target.to_string(), Rgb::from_hex(hex)?);
            }
            None => {
                tracing::debug!("No source color for {}", target);
                self.missing.push(target.to_string());
            }
        }
        Ok(())
    }
}

/// Extract base UI colors using [`BASE_MAP`]
pub fn extract_base_colors(doc: &ThemeDocument) -> Result<ConversionResult> {
    extract_base_colors_with(doc, BASE_MAP)
}

/// Extract base UI colors using a custom `(target, colors key)` table
pub fn extract_base_colors_with(
    doc: &ThemeDocument,
    table: &[(&str, &str)],
) -> Result<ConversionResult> {
    let mut result = ConversionResult::default();
    for (target, key) in table {
        result.resolve(target, doc.color(key))?;
    }
    Ok(result)
}

/// Extract syntax token colors using [`TOKEN_SCOPE_MAP`]
pub fn extract_token_colors(doc: &ThemeDocument) -> Result<ConversionResult> {
    extract_token_colors_with(doc, TOKEN_SCOPE_MAP)
}

/// Extract syntax token colors using a custom `(target, candidate scopes)` table
pub fn extract_token_colors_with(
    doc: &ThemeDocument,
    table: &[(&str, &[&str])],
) -> Result<ConversionResult> {
    let index = scope_colors(doc);
    let global = doc
        .global_token_color()
        .and_then(|token| token.foreground());

    let mut result = ConversionResult::default();
    for (target, candidates) in table {
        let hex = first_scope_match(&index, candidates).or(global);
        result.resolve(target, hex)?;
    }
    Ok(result)
}

/// Map every scope to its foreground color. Last entry wins per scope.
pub fn scope_colors(doc: &ThemeDocument) -> HashMap<&str, &str> {
    let mut colors = HashMap::new();

    for token in &doc.token_colors {
        let (Some(color), Some(scope)) = (token.foreground(), &token.scope) else {
            continue;
        };
        for name in scope.names() {
            colors.insert(name.as_str(), color);
        }
    }

    colors
}

fn first_scope_match<'a>(index: &HashMap<&str, &'a str>, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .find_map(|scope| index.get(scope).copied())
}
