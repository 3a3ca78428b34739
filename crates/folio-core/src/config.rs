//! Configuration types for the portfolio page

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::reveal::RevealOptions;

/// Default preference key for the theme.
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Acknowledgment shown after a valid contact form submission.
pub const DEFAULT_ACKNOWLEDGMENT: &str = "Thank you for your message! I'll get back to you soon.";

/// Main page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Preference key the theme is persisted under
    pub theme_key: String,

    /// Tagline rotation
    pub tagline: TaglineConfig,

    /// Scroll reveal
    pub reveal: RevealConfig,

    /// Message shown when the contact form is accepted
    pub acknowledgment: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            tagline: TaglineConfig::default(),
            reveal: RevealConfig::default(),
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_key.is_empty() {
            return Err(ConfigError::EmptyThemeKey);
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Threshold(self.reveal.threshold));
        }
        if self.tagline.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.tagline.fade_ms >= self.tagline.interval_ms {
            return Err(ConfigError::FadeTooLong {
                fade_ms: self.tagline.fade_ms,
                interval_ms: self.tagline.interval_ms,
            });
        }
        Ok(())
    }
}

/// Tagline rotation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaglineConfig {
    /// Lines in rotation order; the first is shown at load
    pub lines: Vec<String>,
    /// Time between rotations
    pub interval_ms: u64,
    /// Time the tagline stays faded out before the text swaps
    pub fade_ms: u64,
}

impl Default for TaglineConfig {
    fn default() -> Self {
        Self {
            lines: vec![
                "Crafting Digital Experiences | Web Developer & Designer".to_string(),
                "Building the Future, One Line of Code at a Time".to_string(),
                "Where Creativity Meets Technology".to_string(),
                "Turning Ideas into Interactive Realities".to_string(),
            ],
            interval_ms: 5000,
            fade_ms: 500,
        }
    }
}

/// Scroll reveal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Visible fraction that counts as intersecting
    pub threshold: f64,
    /// Bottom root margin in pixels (negative reveals early)
    pub root_margin_bottom_px: i32,
    /// Vertical offset of a concealed element
    pub offset_px: u32,
    /// CSS transition armed on concealed elements
    pub transition: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom_px: -50,
            offset_px: 30,
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}

impl RevealConfig {
    pub fn options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.threshold,
            root_margin_bottom_px: self.root_margin_bottom_px,
        }
    }
}
