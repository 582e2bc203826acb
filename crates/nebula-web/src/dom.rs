//! Browser viewport and scroll access

use leptos::prelude::{document, window};
use leptos::web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use nebula_core::{AnchorScroller, ScrollMetrics};

/// Smooth-scrolls real DOM elements into view
#[derive(Debug, Clone, Copy, Default)]
pub struct DomScroller;

impl AnchorScroller for DomScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let Some(element) = document().get_element_by_id(id) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Current window.innerWidth in logical px
pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Sample the document scroll position
pub fn scroll_metrics() -> ScrollMetrics {
    let win = window();
    let offset = win.scroll_y().unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);

    ScrollMetrics::new(offset, scroll_height, viewport_height)
}

/// Current calendar year from the browser clock
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
