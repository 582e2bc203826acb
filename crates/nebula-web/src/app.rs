//! Main Leptos App component

use leptos::prelude::*;
use leptos::task::spawn_local;
use nebula_core::{catalog, SiteConfig};

use crate::api::fetch_config;
use crate::components::Header;
use crate::hooks::{use_nav_controller, use_scroll_metrics};
use crate::sections::{About, Contact, Footer, Hero, Models, Technology, Testimonials};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // Stock values until the server answers (or if it never does)
    let (config, set_config) = signal(SiteConfig::default());
    spawn_local(async move {
        match fetch_config().await {
            Ok(c) => set_config.set(c),
            Err(e) => leptos::logging::warn!("Using default site config: {}", e),
        }
    });
    provide_context(config);

    let nav = use_nav_controller(config);
    let scroll = use_scroll_metrics();

    let content = catalog();

    view! {
        <div class="page">
            <Header nav scroll config brand=content.brand />
            <main>
                <Hero content=content.hero />
                <Models heading=content.models_heading models=content.models />
                <Technology heading=content.technology_heading features=content.features />
                <About content=content.about />
                <Testimonials heading=content.testimonials_heading testimonials=content.testimonials />
                <Contact content=content.contact />
            </main>
            <Footer brand=content.brand content=content.footer />
        </div>
    }
}
