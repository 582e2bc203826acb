//! Hero section with the slow-zooming background

use leptos::prelude::*;
use nebula_core::content::Hero as HeroContent;
use nebula_core::{HeroZoom, RevealSpec};

use crate::components::{ChevronRightIcon, Intro};

const ZOOM_ANIMATION: &str = "hero-zoom";

#[component]
pub fn Hero(content: HeroContent) -> impl IntoView {
    let zoom = HeroZoom::default();
    let [line1, line2] = content.headline;

    view! {
        <section id="hero" class="hero">
            <style>{zoom.keyframes(ZOOM_ANIMATION)}</style>
            <Intro spec={RevealSpec::hero_text()} class="hero-text">
                <h2 class="hero-title">{line1}<br />{line2}</h2>
                <p class="hero-subtitle">{content.subtitle}</p>
                <button class="btn btn-gold">{content.cta}<ChevronRightIcon /></button>
            </Intro>
            <div class="hero-backdrop" style:animation={zoom.animation(ZOOM_ANIMATION)}>
                <img src=content.image alt=content.image_alt class="cover" />
            </div>
        </section>
    }
}
