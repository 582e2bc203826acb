//! Scroll-triggered reveal wrapper

use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::prelude::*;
use nebula_core::{RevealConfig, RevealSpec, SiteConfig};

use crate::hooks::use_reveal;

/// Derive a reveal animation from the live site config
///
/// Re-evaluates whenever `config` changes, so settings fetched after the
/// first render still reach the page.
pub fn reveal_spec(
    config: ReadSignal<SiteConfig>,
    build: impl Fn(&RevealConfig) -> RevealSpec + Send + Sync + 'static,
) -> Signal<RevealSpec> {
    Signal::derive(move || config.with(|c| build(&c.reveal)))
}

/// Wraps children in a div that animates in once it enters the viewport
#[component]
pub fn Reveal(
    /// Entrance animation to play
    #[prop(into)]
    spec: Signal<RevealSpec>,
    /// Extra CSS classes for the wrapper
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let threshold = match use_context::<ReadSignal<SiteConfig>>() {
        Some(config) => Signal::derive(move || config.with(|c| c.reveal.threshold)),
        None => Signal::stored(RevealConfig::default().threshold),
    };

    let node = NodeRef::<leptos::html::Div>::new();
    let visible = use_reveal(node, threshold);

    view! {
        <div node_ref=node class=class style=move || spec.get().style(visible.get())>
            {children()}
        </div>
    }
}

/// Plays `spec` once right after mount, without waiting for intersection
#[component]
pub fn Intro(
    spec: RevealSpec,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let (shown, set_shown) = signal(false);
    // Next frame, so the hidden style is painted first
    request_animation_frame(move || set_shown.set(true));

    view! {
        <div class=class style=move || spec.style(shown.get())>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_spec_tracks_config_updates() {
        let owner = Owner::new();
        owner.set();

        let (config, set_config) = signal(SiteConfig::default());
        let spec = reveal_spec(config, |r| RevealSpec::card(r, 2));
        assert!((spec.get_untracked().delay_secs - 0.2).abs() < 1e-9);
        assert_eq!(spec.get_untracked().duration_secs, 0.5);

        // Settings fetched from the server after first render
        set_config.update(|c| {
            c.reveal.stagger_secs = 0.25;
            c.reveal.card_duration_secs = 1.5;
        });
        let updated = spec.get_untracked();
        assert!((updated.delay_secs - 0.5).abs() < 1e-9);
        assert_eq!(updated.duration_secs, 1.5);
        assert!(updated.style(false).contains("1.5s"));
    }
}
