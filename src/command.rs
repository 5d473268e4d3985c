//! Roblox Studio command generation
//!
//! The generated Luau snippet is meant to be pasted into the Studio command
//! bar. It wraps the change in undo waypoints and assigns each color to
//! `settings().Studio`, warning (not failing) on names Studio rejects.

use std::path::Path;

use crate::error::Result;
use crate::extract::{extract_base_colors, extract_token_colors, ColorMap};
use crate::theme::ThemeDocument;

/// Placeholder replaced by the JSON color data
const DATA_PLACEHOLDER: &str = "{{THEME_JSON}}";

const COMMAND_TEMPLATE: &str = r#"local ChangeHistoryService = game:GetService("ChangeHistoryService")

local json = [[{{THEME_JSON}}]]
local theme = game.HttpService:JSONDecode(json)

ChangeHistoryService:SetWaypoint("Changing theme")

local studio = settings().Studio

for name, color in pairs(theme) do
    color = Color3.fromRGB(color[1], color[2], color[3])

    local success = pcall(function()
        studio[name] = color
    end)

    if not success then
        warn(("%s is not a valid theme color"):format(name))
    end
end

ChangeHistoryService:SetWaypoint("Theme changed")

print("Successfully changed your Script Editor theme!")"#;

/// A generated command and the setting names it could not fill in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioCommand {
    pub script: String,
    /// Missing base colors first, then missing token colors
    pub missing: Vec<String>,
}

/// Read a theme file and generate its Studio command
pub fn convert(theme_file: &Path) -> Result<StudioCommand> {
    let doc = ThemeDocument::from_file(theme_file)?;
    generate(&doc)
}

/// Generate the Studio command for a parsed theme
pub fn generate(doc: &ThemeDocument) -> Result<StudioCommand> {
    let base = extract_base_colors(doc)?;
    let token = extract_token_colors(doc)?;

    // Token colors are merged last and win on a shared name
    let mut colors = base.color_map;
    colors.extend(token.color_map);

    let mut missing = base.missing;
    missing.extend(token.missing);

    if !missing.is_empty() {
        tracing::debug!("{} colors could not be mapped", missing.len());
    }

    Ok(StudioCommand {
        script: render_command(&colors)?,
        missing,
    })
}

/// Embed the color map as compact JSON inside the Luau template
pub fn render_command(colors: &ColorMap) -> Result<String> {
    let json = serde_json::to_string(colors)?;
    Ok(COMMAND_TEMPLATE.replacen(DATA_PLACEHOLDER, &json, 1))
}
