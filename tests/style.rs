use cgmath::Point2;
use controlcenter::style::{resolve, Overlay};
use controlcenter::{
    Binding, Color, ColorScheme, ControlStyle, Outcome, PointerPhase, Rect, StyleInputs, Tint,
    Toggle, ToggleEvent, ToggleInteraction,
};

const SCHEMES: [ColorScheme; 3] = [ColorScheme::Light, ColorScheme::Dark, ColorScheme::Unknown];

fn all_inputs() -> Vec<StyleInputs> {
    let mut inputs = Vec::new();
    for &color_scheme in SCHEMES.iter() {
        for bits in 0..16u8 {
            inputs.push(StyleInputs {
                is_on: bits & 1 != 0,
                is_pressed: bits & 2 != 0,
                is_hovered: bits & 4 != 0,
                is_enabled: bits & 8 != 0,
                color_scheme,
            });
        }
    }
    inputs
}

fn enabled(is_on: bool, is_pressed: bool) -> StyleInputs {
    StyleInputs {
        is_on,
        is_pressed,
        is_enabled: true,
        ..StyleInputs::default()
    }
}

fn blue() -> Tint {
    Tint::new(Color::rgba(0., 0.48, 1., 1.))
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

// ============================================================================
// Purity and background
// ============================================================================

#[test]
fn test_resolve_is_pure() {
    let styles = [
        ControlStyle::colorless().with_off_image_dim(0.3),
        ControlStyle::colored(blue()).with_invert_foreground(true),
    ];
    for style in styles.iter() {
        for inputs in all_inputs() {
            assert_eq!(resolve(style, &inputs), resolve(style, &inputs));
        }
    }
}

#[test]
fn test_colorless_never_has_background() {
    let style = ControlStyle::colorless();
    for inputs in all_inputs() {
        assert_eq!(resolve(&style, &inputs).background, None, "{:?}", inputs);
    }
}

#[test]
fn test_colored_always_has_background() {
    let style = ControlStyle::colored(blue());
    for inputs in all_inputs() {
        assert!(resolve(&style, &inputs).background.is_some(), "{:?}", inputs);
    }
}

#[test]
fn test_colored_background_follows_state() {
    let off = Color::rgba(0.5, 0.5, 0.5, 1.);
    let style = ControlStyle::colored(blue().with_off(off));

    assert_eq!(resolve(&style, &enabled(true, false)).background, Some(blue().on));
    assert_eq!(resolve(&style, &enabled(false, false)).background, Some(off));

    let disabled = StyleInputs {
        is_on: true,
        ..StyleInputs::default()
    };
    assert_eq!(resolve(&style, &disabled).background, Some(blue().on.opacity(0.5)));
}

#[test]
fn test_neutral_off_fill_per_scheme() {
    let style = ControlStyle::colored(blue());
    let off = |color_scheme: ColorScheme| {
        let inputs = StyleInputs {
            color_scheme,
            ..enabled(false, false)
        };
        resolve(&style, &inputs).background
    };

    assert_eq!(off(ColorScheme::Dark), Some(Color::WHITE.opacity(0.2)));
    assert_eq!(off(ColorScheme::Light), Some(Color::BLACK.opacity(0.1)));
    assert_eq!(off(ColorScheme::Unknown), Some(Color::BLACK.opacity(0.1)));

    // an explicit off fill wins in every scheme
    let gray = Color::white(0.5);
    let explicit = ControlStyle::colored(blue().with_off(gray));
    for &color_scheme in SCHEMES.iter() {
        let inputs = StyleInputs {
            color_scheme,
            ..enabled(false, false)
        };
        assert_eq!(resolve(&explicit, &inputs).background, Some(gray));
    }
}

// ============================================================================
// Foreground
// ============================================================================

#[test]
fn test_foreground_table() {
    let plain = ControlStyle::colored(blue());
    let inverted = plain.with_invert_foreground(true);

    let fg = |style: &ControlStyle, is_on: bool, color_scheme: ColorScheme| {
        let inputs = StyleInputs {
            is_on,
            is_enabled: true,
            color_scheme,
            ..StyleInputs::default()
        };
        resolve(style, &inputs).foreground
    };

    let dark_text_background = Color::text_background(ColorScheme::Dark);

    assert_eq!(fg(&plain, true, ColorScheme::Dark), Color::WHITE);
    assert_eq!(fg(&inverted, true, ColorScheme::Dark), dark_text_background);
    assert_eq!(fg(&plain, true, ColorScheme::Light), Color::WHITE);
    assert_eq!(fg(&inverted, true, ColorScheme::Light), Color::BLACK);
    assert_eq!(fg(&plain, true, ColorScheme::Unknown), Color::BLACK);
    assert_eq!(fg(&inverted, true, ColorScheme::Unknown), Color::BLACK);

    for style in [plain, inverted].iter() {
        assert_eq!(fg(style, false, ColorScheme::Dark), Color::white(0.85));
        assert_eq!(fg(style, false, ColorScheme::Light), Color::BLACK);
        assert_eq!(fg(style, false, ColorScheme::Unknown), Color::WHITE);
    }
}

#[test]
fn test_disabled_foreground_is_faded() {
    let style = ControlStyle::colorless();
    let inputs = StyleInputs {
        color_scheme: ColorScheme::Light,
        ..StyleInputs::default()
    };
    assert_eq!(resolve(&style, &inputs).foreground, Color::BLACK.opacity(0.4));
}

// ============================================================================
// Image opacity and saturation
// ============================================================================

#[test]
fn test_off_dim_applies_only_when_off() {
    let style = ControlStyle::colorless().with_off_image_dim(0.4);
    assert_close(resolve(&style, &enabled(false, false)).image_opacity, 0.6);
    assert_close(resolve(&style, &enabled(true, false)).image_opacity, 1.);
}

#[test]
fn test_off_dim_is_clamped() {
    let too_much = ControlStyle::colorless().with_off_image_dim(1.5);
    assert_close(resolve(&too_much, &enabled(false, false)).image_opacity, 0.);

    let negative = ControlStyle::colorless().with_off_image_dim(-1.);
    assert_close(resolve(&negative, &enabled(false, false)).image_opacity, 1.);
}

#[test]
fn test_press_feedback_for_colorless() {
    let style = ControlStyle::colorless();
    assert_close(resolve(&style, &enabled(true, true)).image_opacity, 0.8);
    assert_close(resolve(&style, &enabled(false, true)).image_opacity, 1.2);
}

#[test]
fn test_opacity_factors_multiply() {
    let style = ControlStyle::colorless().with_off_image_dim(0.5);
    let inputs = StyleInputs {
        is_pressed: true,
        ..StyleInputs::default()
    };
    // 0.5 dim * 1.2 press * 0.5 disabled
    assert_close(resolve(&style, &inputs).image_opacity, 0.3);
}

#[test]
fn test_colored_skips_press_and_disabled_factors() {
    let style = ControlStyle::colored(blue()).with_off_image_dim(0.25);
    assert_close(resolve(&style, &enabled(true, true)).image_opacity, 1.);
    assert_close(resolve(&style, &enabled(false, true)).image_opacity, 0.75);

    let disabled = StyleInputs::default();
    assert_close(resolve(&style, &disabled).image_opacity, 0.75);
}

#[test]
fn test_saturation() {
    let colorless = ControlStyle::colorless();
    let colored = ControlStyle::colored(blue());
    for inputs in all_inputs() {
        let expected = if inputs.is_on { 1. } else { 0. };
        assert_eq!(resolve(&colorless, &inputs).image_saturation, expected);
        assert_eq!(resolve(&colored, &inputs).image_saturation, 1.);
    }
}

// ============================================================================
// Overlay, label, highlight
// ============================================================================

#[test]
fn test_press_overlay() {
    let colored = ControlStyle::colored(blue());
    let colorless = ControlStyle::colorless();

    let dark_pressed = StyleInputs {
        color_scheme: ColorScheme::Dark,
        ..enabled(true, true)
    };
    assert_eq!(
        resolve(&colored, &dark_pressed).overlay,
        Some(Overlay::Circle(Color::WHITE.opacity(0.1)))
    );
    assert_eq!(
        resolve(&colored, &enabled(true, true)).overlay,
        Some(Overlay::Circle(Color::BLACK.opacity(0.1)))
    );
    let unknown_pressed = StyleInputs {
        color_scheme: ColorScheme::Unknown,
        ..enabled(false, true)
    };
    assert_eq!(
        resolve(&colored, &unknown_pressed).overlay,
        Some(Overlay::Circle(Color::BLACK.opacity(0.1)))
    );
    assert_eq!(
        resolve(&colorless, &unknown_pressed).overlay,
        Some(Overlay::ColorBlend(Color::BLACK.opacity(0.5)))
    );
    assert_eq!(
        resolve(&colorless, &enabled(false, true)).overlay,
        Some(Overlay::ColorBlend(Color::BLACK.opacity(0.5)))
    );
    assert_eq!(resolve(&colorless, &enabled(true, false)).overlay, None);
}

#[test]
fn test_label_and_highlight() {
    let style = ControlStyle::colorless();

    let hovered = StyleInputs {
        is_hovered: true,
        ..enabled(false, false)
    };
    let outputs = resolve(&style, &hovered);
    assert_eq!(outputs.label, Color::BLACK);
    assert_eq!(outputs.highlight, Some(Color::BLACK.opacity(0.1)));

    let hovered_disabled = StyleInputs {
        is_enabled: false,
        ..hovered
    };
    let outputs = resolve(&style, &hovered_disabled);
    assert_eq!(outputs.label, Color::BLACK.opacity(0.5));
    assert_eq!(outputs.highlight, None);
}

// ============================================================================
// Toggle appearance
// ============================================================================

#[test]
fn test_toggle_appearance_tracks_state() {
    let is_on = Binding::new(false);
    let interaction = ToggleInteraction::new(is_on.clone(), Rect::local(28., 28.));
    let mut toggle = Toggle::new(interaction, ControlStyle::colorless())
        .with_color_scheme(ColorScheme::Dark);

    assert_eq!(toggle.appearance().overlay, None);
    assert_eq!(toggle.appearance().image_saturation, 0.);

    let press = ToggleEvent::Pointer(PointerPhase::Began(Point2::new(4., 4.)));
    assert_eq!(toggle.apply(press), (Outcome::Pressed(true), true));
    assert!(toggle.appearance().overlay.is_some());

    let release = ToggleEvent::Pointer(PointerPhase::Ended(Point2::new(4., 4.)));
    assert_eq!(toggle.apply(release), (Outcome::Committed(true), true));
    let appearance = toggle.appearance();
    assert_eq!(appearance.overlay, None);
    assert_eq!(appearance.image_saturation, 1.);
    assert_eq!(appearance.foreground, Color::WHITE);

    // the host flips the value itself; the next redraw reflects it
    is_on.propose(false);
    assert_eq!(toggle.appearance().image_saturation, 0.);
}

#[test]
fn test_toggle_redraw_flags() {
    let interaction = ToggleInteraction::new(Binding::new(false), Rect::local(28., 28.));
    let mut toggle = Toggle::new(interaction, ControlStyle::colorless());

    assert_eq!(toggle.apply(ToggleEvent::Hover(true)), (Outcome::Ignored, true));
    assert_eq!(toggle.apply(ToggleEvent::Hover(true)), (Outcome::Ignored, false));
    assert!(toggle.is_hovered());
    assert!(toggle.appearance().highlight.is_some());

    assert_eq!(
        toggle.apply(ToggleEvent::ColorScheme(ColorScheme::Light)),
        (Outcome::Ignored, false)
    );
    assert_eq!(
        toggle.apply(ToggleEvent::ColorScheme(ColorScheme::Dark)),
        (Outcome::Ignored, true)
    );

    assert_eq!(toggle.apply(ToggleEvent::Enabled(false)), (Outcome::Ignored, true));
    assert_eq!(toggle.apply(ToggleEvent::Enabled(false)), (Outcome::Ignored, false));
    assert!(toggle.appearance().highlight.is_none());
}
