//! Half sheet overlay widget
//!
//! A bottom-anchored modal panel with drag-to-dismiss. The host renders
//! its normal content through [`half_sheet`]; while presented, the
//! content is covered by a dimming scrim and the sheet card.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  host content (dimmed by scrim)     │
//! │                                     │
//! │ ┌─────────────────────────────[×]─┐ │
//! │ │            ━━━━━━               │ │  <- drag handle
//! │ │                                 │ │
//! │ │        caller's content         │ │
//! │ │                                 │ │
//! └─┴─────────────────────────────────┴─┘
//! ```
//!
//! Dragging the card down past the style's threshold dismisses it;
//! releasing earlier snaps it back. The card fades as it travels.
//!
//! ## Wiring
//!
//! ```ignore
//! // view:
//! half_sheet(base, self.sheet_open, &self.sheet, &self.style,
//!     || details_view(&self.track), Message::Sheet)
//!
//! // update:
//! Message::Sheet(msg) => {
//!     if let Some(SheetEvent::Dismissed) = self.sheet.update(msg, &self.style) {
//!         self.sheet_open = false;
//!     }
//! }
//! ```

pub mod config;
mod message;
mod state;
pub mod style;
mod view;

pub use config::{default_style_path, load_sheet_style, SheetStyleFile, STYLE_FILENAME};
pub use message::SheetMessage;
pub use state::{SheetEvent, SheetState};
pub use style::{drag_fade, SheetStyle, DEFAULT_CLOSE_ICON};
pub use view::half_sheet;
