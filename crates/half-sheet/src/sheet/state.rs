//! Drag state machine for the half sheet
//!
//! The host owns a `SheetState` per sheet alongside its own presented
//! flag. `update` never touches that flag; it reports a
//! [`SheetEvent::Dismissed`] and the host clears the flag itself.

use super::message::SheetMessage;
use super::style::SheetStyle;

/// Event surfaced to the host by [`SheetState::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    /// The sheet asked to be dismissed (drag past threshold or close
    /// button). The host should set its presented flag to false.
    Dismissed,
}

/// Transient presentation state for one half sheet
///
/// Lives for the duration of the host view; nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct SheetState {
    /// Downward displacement of the card in pixels, always >= 0
    pub drag_offset: f32,
    /// Window-space y where the active drag started tracking
    ///
    /// `mouse_area` presses carry no position, so the origin is taken
    /// from the first move after the press.
    pub drag_origin: Option<f32>,
    /// Whether a press has armed a drag that has not been released yet
    pub dragging: bool,
}

impl SheetState {
    /// Create a fresh state (card at rest)
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset transient state when the sheet is (re)presented
    ///
    /// Call whenever the host flips its presented flag to true. Also
    /// clears any drag left dangling by an external dismissal.
    pub fn open(&mut self) {
        self.drag_offset = 0.0;
        self.drag_origin = None;
        self.dragging = false;
    }

    /// Handle a sheet message, returning an event for the host
    ///
    /// Drag messages are ignored outright when the style disables the
    /// gesture, so a drag can never dismiss a locked sheet even if a
    /// stray message arrives. `CloseRequested` always dismisses.
    pub fn update(&mut self, message: SheetMessage, style: &SheetStyle) -> Option<SheetEvent> {
        match message {
            SheetMessage::DragStarted => {
                if !style.disable_drag_dismiss {
                    self.dragging = true;
                    self.drag_origin = None;
                }
                None
            }
            SheetMessage::DragMoved(y) => {
                if style.disable_drag_dismiss || !self.dragging {
                    return None;
                }
                match self.drag_origin {
                    // First move after the press anchors the gesture
                    None => self.drag_origin = Some(y),
                    // Track the current translation; upward travel clamps to 0
                    Some(origin) => self.drag_offset = (y - origin).max(0.0),
                }
                None
            }
            SheetMessage::DragReleased => {
                if style.disable_drag_dismiss || !self.dragging {
                    return None;
                }
                self.dragging = false;
                self.drag_origin = None;
                let dismissed = self.drag_offset >= style.drag_dismiss_threshold;
                self.drag_offset = 0.0;
                if dismissed {
                    log::debug!("half sheet dismissed by drag");
                    Some(SheetEvent::Dismissed)
                } else {
                    None
                }
            }
            SheetMessage::CloseRequested => {
                self.drag_offset = 0.0;
                self.drag_origin = None;
                self.dragging = false;
                log::debug!("half sheet dismissed by close button");
                Some(SheetEvent::Dismissed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_sequence(
        state: &mut SheetState,
        style: &SheetStyle,
        moves: &[f32],
    ) -> Option<SheetEvent> {
        assert_eq!(state.update(SheetMessage::DragStarted, style), None);
        for &y in moves {
            assert_eq!(state.update(SheetMessage::DragMoved(y), style), None);
        }
        state.update(SheetMessage::DragReleased, style)
    }

    #[test]
    fn test_upward_drag_clamps_to_zero() {
        let style = SheetStyle::default();
        let mut state = SheetState::new();

        state.update(SheetMessage::DragStarted, &style);
        state.update(SheetMessage::DragMoved(200.0), &style); // origin
        state.update(SheetMessage::DragMoved(150.0), &style); // above origin
        assert_eq!(state.drag_offset, 0.0);
        state.update(SheetMessage::DragMoved(120.0), &style);
        assert_eq!(state.drag_offset, 0.0);
    }

    #[test]
    fn test_offset_tracks_last_translation() {
        let style = SheetStyle::default();
        let mut state = SheetState::new();

        state.update(SheetMessage::DragStarted, &style);
        state.update(SheetMessage::DragMoved(100.0), &style); // origin
        state.update(SheetMessage::DragMoved(140.0), &style);
        assert_eq!(state.drag_offset, 40.0);
        state.update(SheetMessage::DragMoved(130.0), &style);
        // Tracks the current translation, not the cumulative distance
        assert_eq!(state.drag_offset, 30.0);
        state.update(SheetMessage::DragMoved(180.0), &style);
        assert_eq!(state.drag_offset, 80.0);
    }

    #[test]
    fn test_release_past_threshold_dismisses() {
        let style = SheetStyle::default();
        let mut state = SheetState::new();

        let event = drag_sequence(&mut state, &style, &[10.0, 160.0]);
        assert_eq!(event, Some(SheetEvent::Dismissed));
        assert_eq!(state.drag_offset, 0.0);
        assert!(!state.dragging);
    }

    #[test]
    fn test_release_at_exact_threshold_dismisses() {
        let style = SheetStyle::default();
        let mut state = SheetState::new();

        let event = drag_sequence(&mut state, &style, &[0.0, 150.0]);
        assert_eq!(event, Some(SheetEvent::Dismissed));
    }

    #[test]
    fn test_release_below_threshold_springs_back() {
        let style = SheetStyle::default();
        let mut state = SheetState::new();

        let event = drag_sequence(&mut state, &style, &[0.0, 149.0]);
        assert_eq!(event, None);
        assert_eq!(state.drag_offset, 0.0);
        assert!(!state.dragging);
    }

    #[test]
    fn test_custom_threshold() {
        let style = SheetStyle {
            drag_dismiss_threshold: 40.0,
            ..SheetStyle::default()
        };
        let mut state = SheetState::new();

        let event = drag_sequence(&mut state, &style, &[0.0, 45.0]);
        assert_eq!(event, Some(SheetEvent::Dismissed));
    }

    #[test]
    fn test_disabled_drag_never_dismisses() {
        let style = SheetStyle {
            disable_drag_dismiss: true,
            ..SheetStyle::default()
        };
        let mut state = SheetState::new();

        let event = drag_sequence(&mut state, &style, &[0.0, 500.0]);
        assert_eq!(event, None);
        assert_eq!(state.drag_offset, 0.0);
        assert!(!state.dragging);

        // Close button still works
        let event = state.update(SheetMessage::CloseRequested, &style);
        assert_eq!(event, Some(SheetEvent::Dismissed));
    }

    #[test]
    fn test_close_button_resets_mid_drag() {
        let style = SheetStyle::default();
        let mut state = SheetState::new();

        state.update(SheetMessage::DragStarted, &style);
        state.update(SheetMessage::DragMoved(0.0), &style);
        state.update(SheetMessage::DragMoved(60.0), &style);
        assert_eq!(state.drag_offset, 60.0);

        let event = state.update(SheetMessage::CloseRequested, &style);
        assert_eq!(event, Some(SheetEvent::Dismissed));
        assert_eq!(state.drag_offset, 0.0);
        assert!(!state.dragging);
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let style = SheetStyle::default();
        let mut state = SheetState::new();

        state.update(SheetMessage::DragMoved(300.0), &style);
        assert_eq!(state.drag_offset, 0.0);
        assert_eq!(state.update(SheetMessage::DragReleased, &style), None);
    }

    #[test]
    fn test_open_resets_dangling_drag() {
        let style = SheetStyle::default();
        let mut state = SheetState::new();

        state.update(SheetMessage::DragStarted, &style);
        state.update(SheetMessage::DragMoved(0.0), &style);
        state.update(SheetMessage::DragMoved(80.0), &style);

        // Host dismissed externally mid-drag, then re-presents
        state.open();
        assert_eq!(state.drag_offset, 0.0);
        assert_eq!(state.drag_origin, None);
        assert!(!state.dragging);
    }
}
