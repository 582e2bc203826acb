//! Scroll progress and the header background fade
//!
//! Both are pure functions of a sampled scroll position. Nothing here is
//! stored between scroll events; the browser re-evaluates on every signal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::SiteConfig;

/// One sample of the document scroll position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset (window.scrollY)
    pub offset: f64,
    /// Total document height (documentElement.scrollHeight)
    pub scroll_height: f64,
    /// Visible viewport height (window.innerHeight)
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            scroll_height,
            viewport_height,
        }
    }

    /// Distance that can actually be scrolled
    pub fn scrollable(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }

    /// Normalized scroll progress, clamped to [0, 1]
    ///
    /// A page shorter than the viewport has progress 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scrollable();
        if scrollable <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / scrollable).clamp(0.0, 1.0)
    }
}

/// RGBA color with 8-bit channels and a float alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn black(a: f64) -> Self {
        Self { r: 0, g: 0, b: 0, a }
    }

    /// CSS `rgba(...)` value
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Maps scroll progress to the header background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderFade {
    /// Progress at which the fade completes
    pub fade_end: f64,
    /// Alpha held from `fade_end` onwards
    pub max_alpha: f64,
}

impl Default for HeaderFade {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

impl HeaderFade {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            fade_end: config.header_fade_end,
            max_alpha: config.header_max_alpha,
        }
    }

    /// Alpha for a progress value: linear on [0, fade_end], flat after
    pub fn alpha(&self, progress: f64) -> f64 {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if self.fade_end <= 0.0 || p >= self.fade_end {
            return self.max_alpha;
        }
        self.max_alpha * (p / self.fade_end)
    }

    pub fn color(&self, progress: f64) -> Rgba {
        Rgba::black(self.alpha(progress))
    }

    /// Header background for a raw scroll sample
    pub fn color_for(&self, metrics: &ScrollMetrics) -> Rgba {
        self.color(metrics.progress())
    }
}
