//! Leptos hooks wiring browser events into nebula-core state

use leptos::ev;
use leptos::html;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use leptos::web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use nebula_core::{NavController, ScrollMetrics, SiteConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;

/// Navigation controller kept in sync with the viewport width
///
/// Mounts at the current width and re-applies it on every resize. A config
/// update only touches the controller when `breakpoint_px` actually changes,
/// so a menu the user opened survives the config fetch. The resize listener
/// is removed when the owning component is torn down.
pub fn use_nav_controller(config: ReadSignal<SiteConfig>) -> RwSignal<NavController> {
    let nav = RwSignal::new(NavController::mount(
        &config.get_untracked(),
        dom::viewport_width(),
    ));

    Effect::new(move |_| {
        let breakpoint_px = config.with(|c| c.breakpoint_px);
        if nav.with_untracked(|n| n.breakpoint_px()) != breakpoint_px {
            nav.update(|n| {
                n.set_breakpoint(breakpoint_px, dom::viewport_width());
            });
        }
    });

    let handle = window_event_listener(ev::resize, move |_| {
        nav.update(|n| n.on_viewport_resize(dom::viewport_width()));
    });
    on_cleanup(move || handle.remove());

    nav
}

/// Latest scroll sample, refreshed on every scroll and resize event
pub fn use_scroll_metrics() -> ReadSignal<ScrollMetrics> {
    let (metrics, set_metrics) = signal(dom::scroll_metrics());

    let on_scroll = window_event_listener(ev::scroll, move |_| {
        set_metrics.set(dom::scroll_metrics());
    });
    // Document height changes with the viewport
    let on_resize = window_event_listener(ev::resize, move |_| {
        set_metrics.set(dom::scroll_metrics());
    });
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    metrics
}

/// Live observer plus the JS callback it calls into
struct ActiveObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

fn disconnect(active: StoredValue<Option<ActiveObserver>, LocalStorage>) {
    let _ = active.try_update_value(|slot| {
        if let Some(a) = slot.take() {
            a.observer.disconnect();
        }
    });
}

/// Flips to true the first time `target` enters the viewport, then stops
/// observing
///
/// The observer is rebuilt when `threshold` changes before the first hit, and
/// disconnected when the owning component is torn down.
pub fn use_reveal(target: NodeRef<html::Div>, threshold: Signal<f64>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let active = StoredValue::new_local(None::<ActiveObserver>);

    Effect::new(move |_| {
        let threshold = threshold.get();
        let Some(node) = target.get() else {
            return;
        };
        disconnect(active);
        if visible.get_untracked() {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let hit = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|e| e.is_intersecting());
                if hit {
                    set_visible.set(true);
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&node);
                active.set_value(Some(ActiveObserver {
                    observer,
                    _callback: callback,
                }));
            }
            Err(e) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e);
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || disconnect(active));

    visible
}
