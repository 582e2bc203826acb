//! Client testimonials

use leptos::prelude::*;
use nebula_core::content::Testimonial;
use nebula_core::{Anchor, RevealSpec, SiteConfig};

use crate::components::{reveal_spec, QuoteMark, Reveal};

#[component]
pub fn Testimonials(heading: &'static str, testimonials: [Testimonial; 3]) -> impl IntoView {
    let config = expect_context::<ReadSignal<SiteConfig>>();

    view! {
        <section id={Anchor::Testimonials.id()} class="section section-alt">
            <div class="container">
                <h3 class="section-title">{heading}</h3>
                <div class="grid-3">
                    {testimonials
                        .into_iter()
                        .enumerate()
                        .map(|(i, t)| {
                            view! {
                                <Reveal spec={reveal_spec(config, move |r| RevealSpec::card(r, i))}>
                                    <div class="testimonial-card">
                                        <div class="quote-mark">
                                            <QuoteMark />
                                        </div>
                                        <p class="quote">{t.quote}</p>
                                        <div class="author">
                                            <div class="avatar"></div>
                                            <div>
                                                <p class="author-name">{t.name}</p>
                                                <p class="author-role">{t.role}</p>
                                            </div>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
