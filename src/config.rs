//! Named control styles loaded from TOML.
//!
//! ```toml
//! tier = "modern"
//! color_scheme = "dark"
//!
//! [styles.wifi]
//! tint = { on = { r = 0.0, g = 0.48, b = 1.0 } }
//!
//! [styles.focus]
//! invert_foreground = true
//! off_image_dim = 0.3
//! ```

use crate::style::{ColorScheme, ControlStyle};
use crate::zone::CapabilityTier;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("no style named {0:?}")]
    UnknownStyle(String),
}

/// Library configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capability tier used to pick slider assets and layout.
    pub tier: CapabilityTier,

    /// Color scheme assumed until the host reports one.
    pub color_scheme: ColorScheme,

    /// Control styles by name.
    pub styles: BTreeMap<String, ControlStyle>,
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(source)?;
        log::debug!(
            "[config] loaded {} style(s), tier {:?}, scheme {:?}",
            config.styles.len(),
            config.tier,
            config.color_scheme
        );
        Ok(config)
    }

    /// Looks up a style by name.
    pub fn style(&self, name: &str) -> Result<&ControlStyle, ConfigError> {
        self.styles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownStyle(name.to_string()))
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(source: &str) -> Result<Config, ConfigError> {
        Config::from_toml(source)
    }
}
