//! Entrance animations
//!
//! Cards and list items fade in from a small offset the first time they
//! enter the viewport. Items in a group are staggered by their index. The
//! browser applies [`RevealSpec::hidden_style`] up front and swaps to
//! [`RevealSpec::visible_style`] once the element intersects.

use serde::Serialize;

use crate::config::RevealConfig;

/// Translation in px from the resting position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Where an element comes from when it reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Rises from below (cards)
    Rise,
    /// Drops from above (nav list)
    Drop,
    /// Slides in from the left (about image, logo)
    FromLeft,
    /// Slides in from the right (about text)
    FromRight,
}

/// One entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealSpec {
    pub from: Offset,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl RevealSpec {
    pub fn new(direction: Direction, distance: f64, duration_secs: f64) -> Self {
        let from = match direction {
            Direction::Rise => Offset { x: 0.0, y: distance },
            Direction::Drop => Offset { x: 0.0, y: -distance },
            Direction::FromLeft => Offset { x: -distance, y: 0.0 },
            Direction::FromRight => Offset { x: distance, y: 0.0 },
        };
        Self {
            from,
            duration_secs,
            delay_secs: 0.0,
        }
    }

    pub fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Card `index` in a staggered group (models, features, testimonials)
    pub fn card(config: &RevealConfig, index: usize) -> Self {
        Self::new(Direction::Rise, config.offset_px, config.card_duration_secs)
            .with_delay(stagger(config, index))
    }

    /// About bullet `index`
    pub fn list_item(config: &RevealConfig, index: usize) -> Self {
        Self::new(Direction::FromRight, config.offset_px, config.list_duration_secs)
            .with_delay(stagger(config, index))
    }

    /// Half of the about section (image from the left, text from the right)
    pub fn about_panel(config: &RevealConfig, direction: Direction) -> Self {
        Self::new(direction, config.slide_px, config.card_duration_secs)
    }

    /// Hero headline block, played on load
    pub fn hero_text() -> Self {
        Self::new(Direction::Rise, 20.0, 0.8).with_delay(0.2)
    }

    /// Brand logo in the header, played on load
    pub fn header_logo() -> Self {
        Self::new(Direction::FromLeft, 20.0, 0.5)
    }

    /// Navigation list in the header, played on load
    pub fn header_nav() -> Self {
        Self::new(Direction::Drop, 20.0, 0.3)
    }

    fn transition(&self) -> String {
        format!(
            "opacity {d}s ease-out {l}s, transform {d}s ease-out {l}s",
            d = self.duration_secs,
            l = self.delay_secs
        )
    }

    /// Inline style before the element is revealed
    pub fn hidden_style(&self) -> String {
        format!(
            "opacity: 0; transform: translate({}px, {}px); transition: {};",
            self.from.x,
            self.from.y,
            self.transition()
        )
    }

    /// Inline style once revealed
    pub fn visible_style(&self) -> String {
        format!(
            "opacity: 1; transform: translate(0px, 0px); transition: {};",
            self.transition()
        )
    }

    pub fn style(&self, visible: bool) -> String {
        if visible {
            self.visible_style()
        } else {
            self.hidden_style()
        }
    }
}

fn stagger(config: &RevealConfig, index: usize) -> f64 {
    index as f64 * config.stagger_secs
}

/// Slow zoom on the hero background, alternating forever
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroZoom {
    pub from_scale: f64,
    pub to_scale: f64,
    pub period_secs: f64,
}

impl Default for HeroZoom {
    fn default() -> Self {
        Self {
            from_scale: 1.1,
            to_scale: 1.0,
            period_secs: 10.0,
        }
    }
}

impl HeroZoom {
    /// CSS `@keyframes` rule named `name`
    pub fn keyframes(&self, name: &str) -> String {
        format!(
            "@keyframes {name} {{ from {{ transform: scale({}); }} to {{ transform: scale({}); }} }}",
            self.from_scale, self.to_scale
        )
    }

    /// CSS `animation` value referencing `name`
    pub fn animation(&self, name: &str) -> String {
        format!(
            "{name} {}s linear infinite alternate",
            self.period_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_stagger() {
        let config = RevealConfig::default();
        let delays: Vec<f64> = (0..3).map(|i| RevealSpec::card(&config, i).delay_secs).collect();
        assert_eq!(delays[0], 0.0);
        assert!((delays[1] - 0.1).abs() < 1e-9);
        assert!((delays[2] - 0.2).abs() < 1e-9);
        assert_eq!(RevealSpec::card(&config, 2).from, Offset { x: 0.0, y: 20.0 });
        assert_eq!(RevealSpec::card(&config, 0).duration_secs, 0.5);
    }

    #[test]
    fn test_directions() {
        let config = RevealConfig::default();
        assert_eq!(
            RevealSpec::about_panel(&config, Direction::FromLeft).from,
            Offset { x: -50.0, y: 0.0 }
        );
        assert_eq!(
            RevealSpec::about_panel(&config, Direction::FromRight).from,
            Offset { x: 50.0, y: 0.0 }
        );
        assert_eq!(RevealSpec::header_nav().from, Offset { x: 0.0, y: -20.0 });
        assert_eq!(RevealSpec::list_item(&config, 3).duration_secs, 0.3);
    }

    #[test]
    fn test_styles() {
        let spec = RevealSpec::hero_text();
        let hidden = spec.style(false);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 20px)"));
        assert!(hidden.contains("0.8s ease-out 0.2s"));

        let visible = spec.style(true);
        assert!(visible.starts_with("opacity: 1;"));
        assert!(visible.contains("translate(0px, 0px)"));
    }

    #[test]
    fn test_hero_zoom_css() {
        let zoom = HeroZoom::default();
        assert_eq!(
            zoom.keyframes("hero-zoom"),
            "@keyframes hero-zoom { from { transform: scale(1.1); } to { transform: scale(1); } }"
        );
        assert_eq!(zoom.animation("hero-zoom"), "hero-zoom 10s linear infinite alternate");
    }
}
