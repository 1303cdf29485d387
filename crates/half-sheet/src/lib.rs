//! Bottom-anchored half sheet modal overlay for iced applications
//!
//! This crate provides a reusable "half sheet": a panel anchored to the
//! bottom edge of the window that slides up over existing content behind
//! a dimming scrim, and can be dismissed by dragging it down or tapping
//! an optional close button.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! Following idiomatic iced patterns:
//!
//! - **State structs**: Pure data (`SheetState`), owned by the host app
//! - **View functions**: Take state + style + content, return `Element<Message>`
//! - **Messages**: `SheetMessage` is lifted into the host message type
//!   through a mapping closure; `SheetState::update` hands back a
//!   `SheetEvent::Dismissed` when the host should clear its presented flag
//!
//! The host keeps ownership of the presented flag. The sheet never flips
//! it directly; it only asks, via the returned event.
//!
//! ## Current Features
//!
//! - **SheetStyle**: colors, corner radius, drag threshold, padding,
//!   overlay opacity, close-button glyph, feature toggles — all defaulted
//! - **Drag to dismiss**: downward drags past a threshold commit the
//!   dismissal; shorter drags snap back
//! - **Card decoration**: rounded corners + drop shadow, optional
//! - **Style file**: YAML overrides loaded from the user config dir

pub mod card;
pub mod sheet;

// Re-export commonly used items
pub use card::{card_style, faded, flat_style};
pub use sheet::{
    default_style_path, drag_fade, half_sheet, load_sheet_style, SheetEvent, SheetMessage,
    SheetState, SheetStyle, SheetStyleFile, DEFAULT_CLOSE_ICON, STYLE_FILENAME,
};
