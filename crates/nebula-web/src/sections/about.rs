//! About section: image left, story and bullet points right

use leptos::prelude::*;
use nebula_core::content::About as AboutContent;
use nebula_core::{Anchor, Direction, RevealSpec, SiteConfig};

use crate::components::{reveal_spec, Reveal, StarIcon};

#[component]
pub fn About(content: AboutContent) -> impl IntoView {
    let config = expect_context::<ReadSignal<SiteConfig>>();

    view! {
        <section id={Anchor::About.id()} class="section section-alt">
            <div class="container about-layout">
                <Reveal spec={reveal_spec(config, |r| RevealSpec::about_panel(r, Direction::FromLeft))} class="about-media">
                    <img src=content.image alt=content.image_alt class="rounded shadow" />
                </Reveal>
                <Reveal spec={reveal_spec(config, |r| RevealSpec::about_panel(r, Direction::FromRight))} class="about-copy">
                    <h4 class="about-heading">{content.heading}</h4>
                    <p class="about-body">{content.body}</p>
                    <div class="about-points" role="list">
                        {content
                            .points
                            .into_iter()
                            .enumerate()
                            .map(|(i, point)| {
                                view! {
                                    <Reveal spec={reveal_spec(config, move |r| RevealSpec::list_item(r, i))} class="about-point">
                                        <StarIcon />
                                        <span role="listitem">{point}</span>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
