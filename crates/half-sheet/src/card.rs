//! Card decoration for the half sheet container
//!
//! Rounded corners plus a soft drop shadow, matching the look of a
//! floating card. The flat variant keeps only the background fill, for
//! callers that want an undecorated panel.

use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Vector};

/// Drop shadow color (black at 20% opacity)
const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.2);

/// Drop shadow blur radius
const SHADOW_BLUR: f32 = 16.0;

/// Scale a color's alpha by a factor
///
/// Used to fade the sheet chrome as the card is dragged toward dismissal.
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor,
        ..color
    }
}

/// Card style: rounded corners + centered drop shadow
pub fn card_style(background: Color, corner_radius: f32, fade: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(background, fade))),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: corner_radius.into(),
        },
        shadow: Shadow {
            color: faded(SHADOW_COLOR, fade),
            offset: Vector::new(0.0, 0.0),
            blur_radius: SHADOW_BLUR,
        },
        ..Default::default()
    }
}

/// Flat style: background fill only, no rounding, no shadow
pub fn flat_style(background: Color, fade: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(background, fade))),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_scales_alpha() {
        let color = Color::from_rgba(0.2, 0.4, 0.6, 0.8);
        let half = faded(color, 0.5);
        assert_eq!(half.a, 0.4);
        assert_eq!(half.r, 0.2);
        assert_eq!(half.g, 0.4);
        assert_eq!(half.b, 0.6);
    }

    #[test]
    fn test_card_style_has_decoration() {
        let style = card_style(Color::WHITE, 20.0, 1.0);
        assert!(style.background.is_some());
        assert_eq!(style.shadow.blur_radius, SHADOW_BLUR);
        assert_eq!(style.shadow.offset, Vector::new(0.0, 0.0));
        assert_eq!(style.shadow.color.a, 0.2);
    }

    #[test]
    fn test_flat_style_has_no_decoration() {
        let style = flat_style(Color::WHITE, 1.0);
        assert!(style.background.is_some());
        assert_eq!(style.shadow, Shadow::default());
        assert_eq!(style.border, Border::default());
    }
}
