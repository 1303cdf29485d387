//! Messages for the half sheet widget

/// Messages emitted by the half sheet overlay
///
/// The view lifts these into the host message type through a mapping
/// closure; the host feeds them back into [`SheetState::update`].
///
/// [`SheetState::update`]: super::SheetState::update
#[derive(Debug, Clone)]
pub enum SheetMessage {
    /// Pointer pressed on the card, arming a drag
    DragStarted,

    /// Pointer moved while a drag is armed (window-space y, px)
    DragMoved(f32),

    /// Pointer released, ending the drag
    DragReleased,

    /// Close button pressed
    CloseRequested,
}
