//! Style file support for the half sheet
//!
//! Lets end users override the sheet's look without a rebuild.
//! Configuration is stored as YAML in the host app's config directory,
//! e.g. ~/.config/my-app/half-sheet.yaml:
//!
//! ```yaml
//! background: "#1E1E22"
//! overlay_opacity: 0.6
//! corner_radius: 12.0
//! close_icon: "×"
//! ```
//!
//! Colors are hex strings; every field is optional and falls back to
//! the built-in default.

use iced::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::style::SheetStyle;

/// Style file name within the host app's config folder
pub const STYLE_FILENAME: &str = "half-sheet.yaml";

/// Serializable representation of [`SheetStyle`]
///
/// Colors are specified as hex strings (e.g. "#33CC66").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetStyleFile {
    /// Scrim color (default: black)
    pub overlay_color: String,
    /// Card background color (default: white)
    pub background: String,
    /// Close button glyph color (default: black)
    pub close_button_color: String,
    /// Close button glyph; absent = no close button
    pub close_icon: Option<String>,
    /// Corner radius of the card
    pub corner_radius: f32,
    /// Drag distance (px) required to dismiss on release
    pub drag_dismiss_threshold: f32,
    /// Padding around the sheet's inner content
    pub inner_padding: f32,
    /// Scrim opacity, 0.0-1.0
    pub overlay_opacity: f32,
    /// Card height in pixels
    pub height: f32,
    /// Disable the drag-to-dismiss gesture
    pub disable_drag_dismiss: bool,
    /// Render the card without rounding and shadow
    pub disable_card: bool,
}

impl Default for SheetStyleFile {
    fn default() -> Self {
        let style = SheetStyle::default();
        Self {
            overlay_color: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
            close_button_color: "#000000".to_string(),
            close_icon: style.close_icon,
            corner_radius: style.corner_radius,
            drag_dismiss_threshold: style.drag_dismiss_threshold,
            inner_padding: style.inner_padding,
            overlay_opacity: style.overlay_opacity,
            height: style.height,
            disable_drag_dismiss: style.disable_drag_dismiss,
            disable_card: style.disable_card,
        }
    }
}

impl SheetStyleFile {
    /// Resolve to a runtime style
    pub fn to_style(&self) -> SheetStyle {
        SheetStyle {
            overlay_color: parse_hex_color(&self.overlay_color, Color::BLACK),
            background: parse_hex_color(&self.background, Color::WHITE),
            close_button_color: parse_hex_color(&self.close_button_color, Color::BLACK),
            close_icon: self.close_icon.clone(),
            corner_radius: self.corner_radius,
            drag_dismiss_threshold: self.drag_dismiss_threshold,
            inner_padding: self.inner_padding,
            overlay_opacity: self.overlay_opacity,
            height: self.height,
            disable_drag_dismiss: self.disable_drag_dismiss,
            disable_card: self.disable_card,
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
/// Returns the fallback on parse failure
fn parse_hex_color(hex: &str, fallback: Color) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        log::warn!("Invalid hex color '{}', using default", hex);
        return fallback;
    }

    let (Ok(r), Ok(g), Ok(b)) = (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) else {
        log::warn!("Invalid hex color '{}', using default", hex);
        return fallback;
    };

    Color::from_rgb8(r, g, b)
}

/// Get the default style file path for a host app
///
/// Returns: ~/.config/{app_name}/half-sheet.yaml
pub fn default_style_path(app_name: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(app_name)
        .join(STYLE_FILENAME)
}

/// Load a sheet style from a YAML file
///
/// If the file doesn't exist, returns the default style.
/// If the file exists but is invalid, logs a warning and returns the
/// default style.
pub fn load_sheet_style(path: &Path) -> SheetStyle {
    log::info!("load_sheet_style: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_sheet_style: Style file doesn't exist, using defaults");
        return SheetStyle::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<SheetStyleFile>(&contents) {
            Ok(file) => file.to_style(),
            Err(e) => {
                log::warn!("load_sheet_style: Failed to parse: {}, using defaults", e);
                SheetStyle::default()
            }
        },
        Err(e) => {
            log::warn!("load_sheet_style: Failed to read: {}, using defaults", e);
            SheetStyle::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_resolves_to_default_style() {
        assert_eq!(SheetStyleFile::default().to_style(), SheetStyle::default());
    }

    #[test]
    fn test_partial_overrides() {
        let file: SheetStyleFile =
            serde_yaml::from_str("corner_radius: 12.0\nbackground: \"#1E1E22\"\n").unwrap();
        let style = file.to_style();

        assert_eq!(style.corner_radius, 12.0);
        assert_eq!(style.background, Color::from_rgb8(0x1E, 0x1E, 0x22));
        // Everything else keeps its default
        assert_eq!(style.drag_dismiss_threshold, 150.0);
        assert_eq!(style.overlay_opacity, 0.8);
        assert_eq!(style.close_icon, None);
    }

    #[test]
    fn test_close_icon_from_file() {
        let file: SheetStyleFile = serde_yaml::from_str("close_icon: \"×\"\n").unwrap();
        assert!(file.to_style().has_close_button());
    }

    #[test]
    fn test_bad_hex_falls_back() {
        assert_eq!(parse_hex_color("not-a-color", Color::BLACK), Color::BLACK);
        assert_eq!(parse_hex_color("#12345", Color::WHITE), Color::WHITE);
        assert_eq!(parse_hex_color("#GGGGGG", Color::WHITE), Color::WHITE);
    }

    #[test]
    fn test_hex_parses_with_or_without_hash() {
        let expected = Color::from_rgb8(0x33, 0xCC, 0x66);
        assert_eq!(parse_hex_color("#33CC66", Color::BLACK), expected);
        assert_eq!(parse_hex_color("33CC66", Color::BLACK), expected);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let style = load_sheet_style(Path::new("/nonexistent/half-sheet.yaml"));
        assert_eq!(style, SheetStyle::default());
    }
}
