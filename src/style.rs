//! Resolving control appearance.
//!
//! [`resolve`] is a pure function of a [`ControlStyle`] and the current [`StyleInputs`]. Hosts
//! should call it on every redraw instead of keeping the outputs around: hover, press and
//! enablement flags change quickly, and cached outputs go stale.

use crate::color::Color;
use serde::Deserialize;

/// Appearance of the surrounding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    /// Any scheme this library doesn’t know about. Resolves to documented defaults.
    #[serde(other)]
    Unknown,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Light
    }
}

/// Fill colors of a colored control’s circle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Tint {
    /// Fill when on.
    pub on: Color,

    /// Fill when off. If unset, a translucent neutral fill matching the color scheme is used.
    #[serde(default)]
    pub off: Option<Color>,
}

impl Tint {
    pub fn new(on: Color) -> Tint {
        Tint { on, off: None }
    }

    pub fn with_off(mut self, off: Color) -> Tint {
        self.off = Some(off);
        self
    }

    fn fill(&self, is_on: bool, scheme: ColorScheme) -> Color {
        if is_on {
            return self.on;
        }
        match (self.off, scheme) {
            (Some(off), _) => off,
            (None, ColorScheme::Dark) => Color::WHITE.opacity(0.2),
            (None, ColorScheme::Light) | (None, ColorScheme::Unknown) => Color::BLACK.opacity(0.1),
        }
    }
}

/// Per-instance style of a circle control.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ControlStyle {
    /// If set, this is a colored variant: a filled circle behind the image conveys state.
    pub tint: Option<Tint>,

    /// Swaps the on-state foreground between text and text background colors.
    pub invert_foreground: bool,

    /// How much to dim the image when off, 0–1. Clamped when used.
    pub off_image_dim: Option<f64>,
}

impl ControlStyle {
    /// A borderless, image-only control.
    pub fn colorless() -> ControlStyle {
        ControlStyle::default()
    }

    /// A control with a filled background circle.
    pub fn colored(tint: Tint) -> ControlStyle {
        ControlStyle {
            tint: Some(tint),
            ..ControlStyle::default()
        }
    }

    pub fn with_invert_foreground(mut self, invert: bool) -> ControlStyle {
        self.invert_foreground = invert;
        self
    }

    pub fn with_off_image_dim(mut self, amount: f64) -> ControlStyle {
        self.off_image_dim = Some(amount);
        self
    }

    pub fn has_color(&self) -> bool {
        self.tint.is_some()
    }
}

/// Dynamic state a control is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleInputs {
    pub is_on: bool,
    pub is_pressed: bool,
    pub is_hovered: bool,
    pub is_enabled: bool,
    pub color_scheme: ColorScheme,
}

/// Press feedback drawn over a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay {
    /// A circle over the whole control, drawn normally.
    Circle(Color),
    /// A rectangle over the image, drawn with the color blend mode.
    ColorBlend(Color),
}

/// Concrete appearance parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleOutputs {
    /// Circle fill. `None` means nothing is drawn, not a default fill.
    pub background: Option<Color>,

    /// Image tint.
    pub foreground: Color,

    /// Image opacity. May exceed 1 while pressed; renderers saturate.
    pub image_opacity: f64,

    /// Image saturation, 0 or 1.
    pub image_saturation: f64,

    /// Press feedback, if any.
    pub overlay: Option<Overlay>,

    /// Label text color.
    pub label: Color,

    /// Menu row highlight behind the control, if any.
    pub highlight: Option<Color>,
}

const PRESSED_ON_OPACITY: f64 = 0.8;
const PRESSED_OFF_OPACITY: f64 = 1.2;
const DISABLED_IMAGE_OPACITY: f64 = 0.5;
const DISABLED_FOREGROUND_OPACITY: f64 = 0.4;
const DISABLED_LABEL_OPACITY: f64 = 0.5;
const DISABLED_BACKGROUND_OPACITY: f64 = 0.5;

/// Resolves the appearance of a control.
pub fn resolve(style: &ControlStyle, inputs: &StyleInputs) -> StyleOutputs {
    StyleOutputs {
        background: background(style, inputs),
        foreground: foreground(style, inputs),
        image_opacity: image_opacity(style, inputs),
        image_saturation: image_saturation(style, inputs),
        overlay: overlay(style, inputs),
        label: label(inputs),
        highlight: highlight(inputs),
    }
}

fn background(style: &ControlStyle, inputs: &StyleInputs) -> Option<Color> {
    let fill = style.tint?.fill(inputs.is_on, inputs.color_scheme);
    if inputs.is_enabled {
        Some(fill)
    } else {
        Some(fill.opacity(DISABLED_BACKGROUND_OPACITY))
    }
}

fn foreground(style: &ControlStyle, inputs: &StyleInputs) -> Color {
    let scheme = inputs.color_scheme;
    let invert = style.invert_foreground;

    let base = if inputs.is_on {
        match scheme {
            ColorScheme::Dark if invert => Color::text_background(scheme),
            ColorScheme::Dark => Color::text(scheme),
            ColorScheme::Light if invert => Color::text(scheme),
            ColorScheme::Light => Color::text_background(scheme),
            ColorScheme::Unknown => Color::text(scheme),
        }
    } else {
        match scheme {
            ColorScheme::Dark => Color::white(0.85),
            ColorScheme::Light => Color::BLACK,
            ColorScheme::Unknown => Color::selected_menu_item_text(),
        }
    };

    if inputs.is_enabled {
        base
    } else {
        base.opacity(DISABLED_FOREGROUND_OPACITY)
    }
}

fn image_opacity(style: &ControlStyle, inputs: &StyleInputs) -> f64 {
    let mut amount = 1.;

    if !inputs.is_on {
        if let Some(dim) = style.off_image_dim {
            amount *= 1. - clamp_unit(dim);
        }
    }

    // colored variants show press and disablement through the background instead
    if !style.has_color() {
        if inputs.is_pressed {
            amount *= if inputs.is_on {
                PRESSED_ON_OPACITY
            } else {
                PRESSED_OFF_OPACITY
            };
        }
        if !inputs.is_enabled {
            amount *= DISABLED_IMAGE_OPACITY;
        }
    }

    amount
}

fn image_saturation(style: &ControlStyle, inputs: &StyleInputs) -> f64 {
    if style.has_color() || inputs.is_on {
        1.
    } else {
        0.
    }
}

fn overlay(style: &ControlStyle, inputs: &StyleInputs) -> Option<Overlay> {
    if !inputs.is_pressed {
        return None;
    }
    if style.has_color() {
        Some(Overlay::Circle(match inputs.color_scheme {
            ColorScheme::Dark => Color::WHITE.opacity(0.1),
            ColorScheme::Light | ColorScheme::Unknown => Color::BLACK.opacity(0.1),
        }))
    } else {
        Some(Overlay::ColorBlend(Color::BLACK.opacity(0.5)))
    }
}

fn label(inputs: &StyleInputs) -> Color {
    let text = Color::text(inputs.color_scheme);
    if inputs.is_enabled {
        text
    } else {
        text.opacity(DISABLED_LABEL_OPACITY)
    }
}

fn highlight(inputs: &StyleInputs) -> Option<Color> {
    if inputs.is_hovered && inputs.is_enabled {
        Some(Color::text(inputs.color_scheme).opacity(0.1))
    } else {
        None
    }
}

/// NaN counts as no dimming.
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.
    } else {
        value.clamp(0., 1.)
    }
}
