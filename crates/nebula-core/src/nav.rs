//! Navigation controller
//!
//! Owns the single `menu_open` flag. Three triggers write it (toggle click,
//! navigation click, viewport resize) and the last write wins. The DOM side
//! is reached through [`AnchorScroller`] so the controller stays testable
//! without a browser.

use tracing::debug;

use crate::anchor::Anchor;
use crate::config::SiteConfig;

/// Performs the smooth scroll for a navigation click
pub trait AnchorScroller {
    /// Scroll the element with `id` to the top of the viewport.
    ///
    /// Returns false when no such element exists.
    fn scroll_to(&self, id: &str) -> bool;
}

/// Result of a navigation click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Target found and scrolled into view
    Scrolled,
    /// No element with that id; scroll skipped
    TargetMissing,
}

/// Menu state for the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavController {
    menu_open: bool,
    breakpoint_px: u32,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl NavController {
    /// Create a closed controller; call [`mount`](Self::mount) once the
    /// viewport width is known
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            menu_open: false,
            breakpoint_px: config.breakpoint_px,
        }
    }

    /// Create and immediately apply the current viewport width
    pub fn mount(config: &SiteConfig, viewport_width: f64) -> Self {
        let mut nav = Self::new(config);
        nav.on_viewport_resize(viewport_width);
        nav
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn breakpoint_px(&self) -> u32 {
        self.breakpoint_px
    }

    /// Whether `width` counts as a wide viewport (hard cutoff, no hysteresis)
    pub fn is_wide(&self, width: f64) -> bool {
        width >= f64::from(self.breakpoint_px)
    }

    /// Switch to a new breakpoint and re-apply `viewport_width`.
    ///
    /// A no-op when the breakpoint is unchanged, so an open menu stays open.
    /// Returns whether anything changed.
    pub fn set_breakpoint(&mut self, breakpoint_px: u32, viewport_width: f64) -> bool {
        if breakpoint_px == self.breakpoint_px {
            return false;
        }
        self.breakpoint_px = breakpoint_px;
        self.on_viewport_resize(viewport_width);
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(menu_open = self.menu_open, "Menu toggled");
    }

    /// Open the menu on wide viewports, close it on narrow ones
    pub fn on_viewport_resize(&mut self, width: f64) {
        self.menu_open = self.is_wide(width);
        debug!(width, menu_open = self.menu_open, "Viewport resized");
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Scroll to `anchor` and close the menu.
    ///
    /// The menu closes whether or not the target element exists.
    pub fn navigate_to(&mut self, anchor: Anchor, scroller: &impl AnchorScroller) -> NavOutcome {
        self.navigate_to_id(anchor.id(), scroller)
    }

    /// Same as [`navigate_to`](Self::navigate_to) for an arbitrary element id
    pub fn navigate_to_id(&mut self, id: &str, scroller: &impl AnchorScroller) -> NavOutcome {
        let id = id.trim_start_matches('#');
        let outcome = if scroller.scroll_to(id) {
            NavOutcome::Scrolled
        } else {
            debug!(id, "Navigation target not found, skipping scroll");
            NavOutcome::TargetMissing
        };
        self.close_menu();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records scroll requests; only knows the ids it was built with
    struct FakeScroller {
        known: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeScroller {
        fn new(known: Vec<&'static str>) -> Self {
            Self {
                known,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnchorScroller for FakeScroller {
        fn scroll_to(&self, id: &str) -> bool {
            self.calls.borrow_mut().push(id.to_string());
            self.known.contains(&id)
        }
    }

    #[test]
    fn test_resize_breakpoint_is_hard_cutoff() {
        let mut nav = NavController::default();
        for (width, expected) in [
            (0.0, false),
            (320.0, false),
            (767.0, false),
            (767.99, false),
            (768.0, true),
            (768.5, true),
            (1024.0, true),
            (3840.0, true),
        ] {
            nav.on_viewport_resize(width);
            assert_eq!(nav.menu_open(), expected, "width {width}");
        }
    }

    #[test]
    fn test_resize_overrides_toggle() {
        let mut nav = NavController::mount(&SiteConfig::default(), 500.0);
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.on_viewport_resize(600.0);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_toggle_twice_restores() {
        for start in [300.0, 1200.0] {
            let mut nav = NavController::mount(&SiteConfig::default(), start);
            let before = nav.menu_open();
            nav.toggle_menu();
            assert_ne!(nav.menu_open(), before);
            nav.toggle_menu();
            assert_eq!(nav.menu_open(), before);
        }
    }

    #[test]
    fn test_navigate_always_closes() {
        let scroller = FakeScroller::new(vec!["models"]);
        let mut nav = NavController::mount(&SiteConfig::default(), 1920.0);
        assert!(nav.menu_open());

        assert_eq!(
            nav.navigate_to(Anchor::Models, &scroller),
            NavOutcome::Scrolled
        );
        assert!(!nav.menu_open());

        nav.toggle_menu();
        assert_eq!(
            nav.navigate_to_id("#nowhere", &scroller),
            NavOutcome::TargetMissing
        );
        assert!(!nav.menu_open());

        // Already closed stays closed
        nav.navigate_to(Anchor::Contact, &scroller);
        assert!(!nav.menu_open());
        assert_eq!(*scroller.calls.borrow(), vec!["models", "nowhere", "contact"]);
    }

    #[test]
    fn test_same_breakpoint_keeps_user_toggle() {
        let mut nav = NavController::mount(&SiteConfig::default(), 500.0);
        nav.toggle_menu();
        assert!(!nav.set_breakpoint(768, 500.0));
        assert!(nav.menu_open());
    }

    #[test]
    fn test_new_breakpoint_reapplies_width() {
        let mut nav = NavController::mount(&SiteConfig::default(), 900.0);
        assert!(nav.menu_open());
        assert!(nav.set_breakpoint(1024, 900.0));
        assert_eq!(nav.breakpoint_px(), 1024);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_custom_breakpoint() {
        let config = SiteConfig {
            breakpoint_px: 1024,
            ..Default::default()
        };
        let nav = NavController::mount(&config, 900.0);
        assert!(!nav.menu_open());
        assert_eq!(nav.breakpoint_px(), 1024);
        assert!(nav.is_wide(1024.0));
    }
}
