use controlcenter::zone::CapabilityTier;
use controlcenter::{Color, ColorScheme, Config, ConfigError, ControlStyle};

const SAMPLE: &str = r#"
tier = "legacy"
color_scheme = "dark"

[styles.wifi]
tint = { on = { r = 0.0, g = 0.48, b = 1.0 }, off = { r = 1.0, g = 1.0, b = 1.0, a = 0.2 } }

[styles.focus]
invert_foreground = true
off_image_dim = 0.3

[styles.plain]
"#;

#[test]
fn test_parse_sample() {
    let config = Config::from_toml(SAMPLE).unwrap();
    assert_eq!(config.tier, CapabilityTier::Legacy);
    assert_eq!(config.color_scheme, ColorScheme::Dark);
    assert_eq!(config.styles.len(), 3);

    let wifi = config.style("wifi").unwrap();
    assert!(wifi.has_color());
    let tint = wifi.tint.unwrap();
    // alpha defaults to opaque
    assert_eq!(tint.on, Color::rgba(0., 0.48, 1., 1.));
    assert_eq!(tint.off, Some(Color::rgba(1., 1., 1., 0.2)));

    let focus = config.style("focus").unwrap();
    assert!(!focus.has_color());
    assert!(focus.invert_foreground);
    assert_eq!(focus.off_image_dim, Some(0.3));

    assert_eq!(*config.style("plain").unwrap(), ControlStyle::colorless());
}

#[test]
fn test_defaults_when_empty() {
    let config: Config = "".parse().unwrap();
    assert_eq!(config.tier, CapabilityTier::Modern);
    assert_eq!(config.color_scheme, ColorScheme::Light);
    assert!(config.styles.is_empty());
}

#[test]
fn test_unknown_color_scheme_is_not_an_error() {
    let config = Config::from_toml("color_scheme = \"sepia\"").unwrap();
    assert_eq!(config.color_scheme, ColorScheme::Unknown);
}

#[test]
fn test_out_of_range_dim_is_kept() {
    // dim amounts are clamped when resolving, not when loading
    let config = Config::from_toml("[styles.a]\noff_image_dim = 4.0").unwrap();
    assert_eq!(config.style("a").unwrap().off_image_dim, Some(4.0));
}

#[test]
fn test_unknown_style() {
    let config = Config::from_toml(SAMPLE).unwrap();
    match config.style("bluetooth") {
        Err(ConfigError::UnknownStyle(name)) => assert_eq!(name, "bluetooth"),
        other => panic!("expected unknown style, got {:?}", other),
    }
}

#[test]
fn test_invalid_toml() {
    match Config::from_toml("tier = [") {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("expected parse error, got {:?}", other),
    }

    let err = Config::from_toml("tier = \"futuristic\"").unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));
}
