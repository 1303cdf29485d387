//! Style configuration for the half sheet
//!
//! All fields have usable defaults; callers override only what they
//! care about. Values are accepted as-is with no validation — a
//! negative radius or threshold renders wrong, it does not crash.

use iced::Color;

/// Default drag distance (px) required to dismiss on release
pub const DEFAULT_DRAG_DISMISS_THRESHOLD: f32 = 150.0;

/// Default padding around the sheet's inner content
pub const DEFAULT_INNER_PADDING: f32 = 16.0;

/// Default corner radius of the card
pub const DEFAULT_CORNER_RADIUS: f32 = 20.0;

/// Default scrim opacity
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.8;

/// Default card height in pixels
pub const DEFAULT_HEIGHT: f32 = 400.0;

/// Default close button glyph, used by [`SheetStyle::with_close_button`]
pub const DEFAULT_CLOSE_ICON: &str = "×";

/// Visual and behavioral configuration for a half sheet
///
/// Construct with `SheetStyle::default()` and override individual
/// fields, or use the `with_*` helpers for the common toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyle {
    /// Scrim color behind the card
    pub overlay_color: Color,
    /// Card background color
    pub background: Color,
    /// Close button glyph color
    pub close_button_color: Color,
    /// Close button glyph. `None` renders no close button.
    pub close_icon: Option<String>,
    /// Corner radius of the card (ignored when `disable_card` is set)
    pub corner_radius: f32,
    /// Downward drag distance (px) at which release dismisses the sheet
    pub drag_dismiss_threshold: f32,
    /// Padding around the caller's content inside the card
    pub inner_padding: f32,
    /// Scrim opacity, 0.0-1.0
    pub overlay_opacity: f32,
    /// Card height in pixels
    pub height: f32,
    /// Disable the drag gesture entirely (no handlers are attached)
    pub disable_drag_dismiss: bool,
    /// Render the card without corner rounding and shadow
    pub disable_card: bool,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            overlay_color: Color::BLACK,
            background: Color::WHITE,
            close_button_color: Color::BLACK,
            close_icon: None,
            corner_radius: DEFAULT_CORNER_RADIUS,
            drag_dismiss_threshold: DEFAULT_DRAG_DISMISS_THRESHOLD,
            inner_padding: DEFAULT_INNER_PADDING,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            height: DEFAULT_HEIGHT,
            disable_drag_dismiss: false,
            disable_card: false,
        }
    }
}

impl SheetStyle {
    /// Enable the close button with the default glyph
    pub fn with_close_button(mut self) -> Self {
        self.close_icon = Some(DEFAULT_CLOSE_ICON.to_string());
        self
    }

    /// Whether a close button should be rendered
    pub fn has_close_button(&self) -> bool {
        self.close_icon.is_some()
    }
}

/// Opacity of the sheet chrome for a given drag offset
///
/// The card starts fully opaque and fades out as it travels: `2 - offset/50`,
/// clamped to 0.0-1.0. Fully transparent from 100 px onward.
pub fn drag_fade(offset: f32) -> f32 {
    (2.0 - offset / 50.0).clamp(0.0, 1.0)
}
