//! Colors.

use crate::style::ColorScheme;
use serde::Deserialize;

fn opaque() -> f64 {
    1.
}

/// An RGBA color with components in the 0–1 range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0., 0., 0., 1.);
    pub const WHITE: Color = Color::rgba(1., 1., 1., 1.);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// An opaque gray with the given white level.
    pub const fn white(level: f64) -> Color {
        Color::rgba(level, level, level, 1.)
    }

    /// Returns this color with its alpha multiplied by `opacity`.
    pub fn opacity(self, opacity: f64) -> Color {
        Color {
            a: self.a * opacity.clamp(0., 1.),
            ..self
        }
    }

    /// Primary text color.
    pub fn text(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::WHITE,
            ColorScheme::Light | ColorScheme::Unknown => Color::BLACK,
        }
    }

    /// Background color of text areas; the inverse of [`Color::text`].
    pub fn text_background(scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Dark => Color::rgba(0.118, 0.118, 0.118, 1.),
            ColorScheme::Light | ColorScheme::Unknown => Color::WHITE,
        }
    }

    /// Text color of a highlighted menu item.
    pub fn selected_menu_item_text() -> Color {
        Color::WHITE
    }
}
