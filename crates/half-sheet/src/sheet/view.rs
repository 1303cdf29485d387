//! View composition for the half sheet overlay
//!
//! Stock iced widgets only: the overlay is a `stack` of host content,
//! scrim, and the bottom-anchored card, with a transparent full-screen
//! capture layer on top while a drag is active so pointer coordinates
//! stay in window space as the card moves.

use iced::widget::{button, column, container, mouse_area, opaque, stack, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Point};

use crate::card::{card_style, faded, flat_style};

use super::message::SheetMessage;
use super::state::SheetState;
use super::style::{drag_fade, SheetStyle};

// ─────────────────────────────────────────────────────────────────────────────
// Chrome constants
// ─────────────────────────────────────────────────────────────────────────────

/// Width of the drag handle bar
const HANDLE_WIDTH: f32 = 40.0;

/// Height of the drag handle bar
const HANDLE_HEIGHT: f32 = 3.0;

/// Corner radius of the drag handle bar
const HANDLE_RADIUS: f32 = 10.0;

/// Gray at 60% opacity
const HANDLE_COLOR: Color = Color::from_rgba(0.5, 0.5, 0.5, 0.6);

/// Gap between the card's top edge and the handle
const HANDLE_TOP_PADDING: f32 = 16.0;

/// Close button glyph size
const CLOSE_ICON_SIZE: f32 = 20.0;

/// Gap between the header chrome and the caller's content
const BODY_TOP_PADDING: f32 = 8.0;

// ─────────────────────────────────────────────────────────────────────────────
// Main view function
// ─────────────────────────────────────────────────────────────────────────────

/// Compose host content with a half sheet overlay
///
/// Renders `base` untouched while `is_presented` is false. While
/// presented, layers a scrim and the sheet card above it; `sheet` is
/// only invoked in that case. Internal [`SheetMessage`]s are lifted
/// into the host message type through `map` — feed them back into
/// [`SheetState::update`] and clear the presented flag when it returns
/// [`SheetEvent::Dismissed`].
///
/// [`SheetEvent::Dismissed`]: super::SheetEvent::Dismissed
pub fn half_sheet<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    is_presented: bool,
    state: &SheetState,
    style: &'a SheetStyle,
    sheet: impl FnOnce() -> Element<'a, Message>,
    map: impl Fn(SheetMessage) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    if !is_presented {
        return base;
    }

    let layers = stack![
        base,
        scrim(style),
        sheet_layer(state, style, sheet(), &map),
    ];

    // Pointer tracking lives on its own full-screen layer so drag
    // coordinates stay stable while the card travels under the cursor.
    if state.dragging && !style.disable_drag_dismiss {
        layers.push(drag_capture(map)).into()
    } else {
        layers.into()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layers
// ─────────────────────────────────────────────────────────────────────────────

/// Full-screen dimming layer behind the card
///
/// Blocks interaction with the host content; dismissal goes through the
/// drag gesture or the close button, never through scrim taps.
fn scrim<'a, Message: 'a>(style: &SheetStyle) -> Element<'a, Message> {
    let color = faded(style.overlay_color, style.overlay_opacity);

    opaque(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(color)),
                ..Default::default()
            }),
    )
}

/// Bottom-anchored layer holding the card
fn sheet_layer<'a, Message: Clone + 'a>(
    state: &SheetState,
    style: &'a SheetStyle,
    content: Element<'a, Message>,
    map: impl Fn(SheetMessage) -> Message,
) -> Element<'a, Message> {
    let fade = drag_fade(state.drag_offset);

    // The card is a fixed-height panel; rendering the drag offset as a
    // shrinking, clipped card keeps its bottom edge glued to the window
    // edge while the top edge travels down by drag_offset pixels.
    let visible_height = (style.height - state.drag_offset).max(0.0);

    let body = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .padding(Padding {
            top: BODY_TOP_PADDING,
            right: style.inner_padding,
            bottom: style.inner_padding,
            left: style.inner_padding,
        });

    let appearance = card_appearance(style, fade);

    let card = container(
        column![header(style, fade, &map), body]
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(visible_height))
    .style(move |_theme| appearance);

    let card: Element<'a, Message> = if style.disable_drag_dismiss {
        card.into()
    } else {
        mouse_area(card)
            .on_press(map(SheetMessage::DragStarted))
            .on_release(map(SheetMessage::DragReleased))
            .into()
    };

    container(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Alignment::End)
        .into()
}

/// Transparent full-screen layer tracking the pointer mid-drag
fn drag_capture<'a, Message: Clone + 'a>(
    map: impl Fn(SheetMessage) -> Message + Clone + 'a,
) -> Element<'a, Message> {
    let released = map(SheetMessage::DragReleased);

    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_move(move |point: Point| map(SheetMessage::DragMoved(point.y)))
    .on_release(released)
    .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Card chrome
// ─────────────────────────────────────────────────────────────────────────────

/// Header strip: centered drag handle, optional close button at the right
fn header<'a, Message: Clone + 'a>(
    style: &'a SheetStyle,
    fade: f32,
    map: impl Fn(SheetMessage) -> Message,
) -> Element<'a, Message> {
    let handle_bar = container(drag_handle(fade))
        .center_x(Length::Fill)
        .padding(Padding {
            top: HANDLE_TOP_PADDING,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        });

    let Some(glyph) = style.close_icon.as_deref() else {
        return handle_bar.into();
    };

    let glyph_color = faded(style.close_button_color, fade);
    let close_btn = button(text(glyph).size(CLOSE_ICON_SIZE).color(glyph_color))
        .on_press(map(SheetMessage::CloseRequested))
        .padding([2, 6])
        .style(close_button_style);

    stack![
        handle_bar,
        container(close_btn)
            .width(Length::Fill)
            .align_x(Alignment::End)
            .padding(8),
    ]
    .into()
}

/// Static indicator bar hinting that the card is draggable
fn drag_handle<'a, Message: 'a>(fade: f32) -> Element<'a, Message> {
    let color = faded(HANDLE_COLOR, fade);

    container(Space::new())
        .width(Length::Fixed(HANDLE_WIDTH))
        .height(Length::Fixed(HANDLE_HEIGHT))
        .style(move |_theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: HANDLE_RADIUS.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Pick the card's container style: decorated card or flat panel
fn card_appearance(style: &SheetStyle, fade: f32) -> container::Style {
    if style.disable_card {
        flat_style(style.background, fade)
    } else {
        card_style(style.background, style.corner_radius, fade)
    }
}

fn close_button_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Shadow;

    #[test]
    fn test_card_appearance_decorated() {
        let style = SheetStyle::default();
        let appearance = card_appearance(&style, 1.0);
        assert_eq!(appearance.border.radius, 20.0.into());
        assert!(appearance.shadow.blur_radius > 0.0);
    }

    #[test]
    fn test_card_appearance_flat() {
        let style = SheetStyle {
            disable_card: true,
            ..SheetStyle::default()
        };
        let appearance = card_appearance(&style, 1.0);
        assert_eq!(appearance.border, Border::default());
        assert_eq!(appearance.shadow, Shadow::default());
    }

    #[test]
    fn test_card_fades_with_offset() {
        let style = SheetStyle::default();
        let appearance = card_appearance(&style, drag_fade(75.0));
        let Some(Background::Color(bg)) = appearance.background else {
            panic!("card has no background color");
        };
        assert_eq!(bg.a, 0.5);
    }
}
