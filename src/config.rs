//! Interaction settings.
//!
//! Loaded from TOML; every field is optional and falls back to the values
//! the site ships with.
//!
//! ```toml
//! [menu]
//! breakpoint = 768.0
//!
//! [carousel]
//! transition_ms = 300
//! threshold = { policy = "pixels", value = 60.0 }
//!
//! [navbar]
//! scrolled_offset = 20.0
//!
//! [page]
//! wheel_step = 3.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::{DEFAULT_TRANSITION_MS, MENU_BREAKPOINT, NAVBAR_SCROLL_OFFSET, SwipeThreshold};

/// Default page scroll per wheel notch.
pub const DEFAULT_WHEEL_STEP: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub menu: MenuConfig,
    pub carousel: CarouselConfig,
    pub navbar: NavbarConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Viewport width above which the menu is forced closed.
    pub breakpoint: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            breakpoint: MENU_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Snap animation duration.
    pub transition_ms: u32,
    /// Threshold for carousels whose layout does not pick one.
    pub threshold: SwipeThreshold,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            threshold: SwipeThreshold::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub scrolled_offset: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_offset: NAVBAR_SCROLL_OFFSET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub wheel_step: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            wheel_step: DEFAULT_WHEEL_STEP,
        }
    }
}

impl InteractionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("loaded interaction config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject values the state machines cannot work with.
    pub fn validate(&self) -> Result<()> {
        self.carousel
            .threshold
            .validate()
            .map_err(|reason| invalid("carousel.threshold", reason))?;
        if !(self.menu.breakpoint > 0.0) {
            return Err(invalid("menu.breakpoint", "must be positive".to_string()));
        }
        if !(self.navbar.scrolled_offset >= 0.0) {
            return Err(invalid("navbar.scrolled_offset", "must not be negative".to_string()));
        }
        if !(self.page.wheel_step > 0.0) {
            return Err(invalid("page.wheel_step", "must be positive".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InteractionConfig::default();
        assert_eq!(config.menu.breakpoint, 768.0);
        assert_eq!(config.carousel.transition_ms, 300);
        assert_eq!(config.carousel.threshold, SwipeThreshold::TrackFraction(0.15));
        assert_eq!(config.navbar.scrolled_offset, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = InteractionConfig::from_toml_str("").unwrap();
        assert_eq!(config, InteractionConfig::default());
    }

    #[test]
    fn test_pixel_threshold() {
        let config = InteractionConfig::from_toml_str(
            r#"
            [carousel]
            threshold = { policy = "pixels", value = 60.0 }
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.threshold, SwipeThreshold::Pixels(60.0));
        assert_eq!(config.carousel.transition_ms, 300);
    }

    #[test]
    fn test_partial_sections() {
        let config = InteractionConfig::from_toml_str(
            r#"
            [menu]
            breakpoint = 1024.0
            "#,
        )
        .unwrap();
        assert_eq!(config.menu.breakpoint, 1024.0);
        assert_eq!(config.page.wheel_step, DEFAULT_WHEEL_STEP);
    }

    #[test]
    fn test_invalid_fraction() {
        let err = InteractionConfig::from_toml_str(
            r#"
            [carousel]
            threshold = { policy = "track_fraction", value = 1.5 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "carousel.threshold", .. }));
    }

    #[test]
    fn test_zero_pixel_threshold_rejected() {
        let err = InteractionConfig::from_toml_str(
            r#"
            [carousel]
            threshold = { policy = "pixels", value = 0.0 }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "carousel.threshold", .. }));
    }

    #[test]
    fn test_invalid_breakpoint() {
        let err = InteractionConfig::from_toml_str("[menu]\nbreakpoint = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "menu.breakpoint", .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = InteractionConfig::from_toml_str("[menu\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[navbar]\nscrolled_offset = 40.0").unwrap();

        let config = InteractionConfig::load(file.path()).unwrap();
        assert_eq!(config.navbar.scrolled_offset, 40.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InteractionConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
