//! Site configuration
//!
//! Presentation constants that drive the navigation controller, the header
//! fade and the reveal animations. Every field has a default, so an empty
//! TOML file (or no file at all) yields the stock page.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{CoreError, Result};

/// Top-level site configuration (from nebula.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Viewport width (logical px) at or above which the menu is open
    pub breakpoint_px: u32,

    /// Scroll progress at which the header reaches full opacity
    pub header_fade_end: f64,

    /// Header background alpha once the fade is complete
    pub header_max_alpha: f64,

    /// Reveal animation timings
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            header_fade_end: 0.2,
            header_max_alpha: 0.8,
            reveal: RevealConfig::default(),
        }
    }
}

/// Timings for scroll-triggered reveal animations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay added per item index within a group
    pub stagger_secs: f64,

    /// Duration for cards (models, features, testimonials)
    pub card_duration_secs: f64,

    /// Duration for list items (about bullets)
    pub list_duration_secs: f64,

    /// Vertical travel for rise-in animations
    pub offset_px: f64,

    /// Horizontal travel for the about section slide-ins
    pub slide_px: f64,

    /// Fraction of the element that must be visible to trigger
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_secs: 0.1,
            card_duration_secs: 0.5,
            list_duration_secs: 0.3,
            offset_px: 20.0,
            slide_px: 50.0,
            threshold: 0.1,
        }
    }
}

impl SiteConfig {
    /// Parse from a TOML string and validate
    pub fn from_toml_str(path: &Path, content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(|e| CoreError::ConfigParse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(path, &content)?;
        debug!(path = %path.display(), ?config, "Loaded site config");
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject values that would make the page misbehave
    pub fn validate(&self) -> Result<()> {
        if self.breakpoint_px == 0 {
            return Err(invalid("breakpoint_px must be greater than 0"));
        }
        if !(self.header_fade_end > 0.0 && self.header_fade_end <= 1.0) {
            return Err(invalid(format!(
                "header_fade_end must be in (0, 1], got {}",
                self.header_fade_end
            )));
        }
        if !(0.0..=1.0).contains(&self.header_max_alpha) {
            return Err(invalid(format!(
                "header_max_alpha must be in [0, 1], got {}",
                self.header_max_alpha
            )));
        }

        let r = &self.reveal;
        for (name, value) in [
            ("stagger_secs", r.stagger_secs),
            ("card_duration_secs", r.card_duration_secs),
            ("list_duration_secs", r.list_duration_secs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!(
                    "reveal.{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }
        for (name, value) in [("offset_px", r.offset_px), ("slide_px", r.slide_px)] {
            if !value.is_finite() {
                return Err(invalid(format!(
                    "reveal.{name} must be a finite number, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&r.threshold) {
            return Err(invalid(format!(
                "reveal.threshold must be in [0, 1], got {}",
                r.threshold
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::InvalidConfig {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn p() -> PathBuf {
        PathBuf::from("nebula.toml")
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.breakpoint_px, 768);
        assert_eq!(config.header_fade_end, 0.2);
        assert_eq!(config.header_max_alpha, 0.8);
        assert_eq!(config.reveal.stagger_secs, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = SiteConfig::from_toml_str(&p(), "").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
breakpoint_px = 1024

[reveal]
stagger_secs = 0.25
"#;
        let config = SiteConfig::from_toml_str(&p(), toml).unwrap();
        assert_eq!(config.breakpoint_px, 1024);
        assert_eq!(config.header_fade_end, 0.2);
        assert_eq!(config.reveal.stagger_secs, 0.25);
        assert_eq!(config.reveal.card_duration_secs, 0.5);
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::from_toml_str(&p(), "breakpoint_px = \"wide\"").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse { .. }));
    }

    #[test]
    fn test_validation_errors() {
        for toml in [
            "breakpoint_px = 0",
            "header_fade_end = 0.0",
            "header_fade_end = 1.5",
            "header_max_alpha = -0.1",
            "[reveal]\nthreshold = 2.0",
            "[reveal]\nstagger_secs = -1.0",
            "[reveal]\nstagger_secs = nan",
            "[reveal]\ncard_duration_secs = inf",
            "[reveal]\nlist_duration_secs = -inf",
            "[reveal]\noffset_px = nan",
            "[reveal]\nslide_px = inf",
            "header_fade_end = nan",
            "header_max_alpha = nan",
        ] {
            let err = SiteConfig::from_toml_str(&p(), toml).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidConfig { .. }),
                "expected InvalidConfig for {toml:?}"
            );
        }
    }

    #[test]
    fn test_non_finite_timings_never_reach_css() {
        let err = SiteConfig::from_toml_str(
            &p(),
            "[reveal]\nstagger_secs = nan\ncard_duration_secs = inf",
        )
        .unwrap_err();
        assert!(err.to_string().contains("reveal.stagger_secs"));

        // Negative travel is a direction, not an error
        let config = SiteConfig::from_toml_str(&p(), "[reveal]\noffset_px = -10.0").unwrap();
        assert_eq!(config.reveal.offset_px, -10.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header_max_alpha = 0.5").unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.header_max_alpha, 0.5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/nebula.toml")).unwrap_err();
        assert!(matches!(err, CoreError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_or_default_none() {
        assert_eq!(
            SiteConfig::load_or_default(None).unwrap(),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_to_toml_reparses() {
        let config = SiteConfig {
            breakpoint_px: 900,
            ..Default::default()
        };
        let text = config.to_toml().unwrap();
        assert!(text.contains("breakpoint_px = 900"));
        assert_eq!(SiteConfig::from_toml_str(&p(), &text).unwrap(), config);
    }
}
