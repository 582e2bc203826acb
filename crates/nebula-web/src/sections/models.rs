//! Model showcase cards

use leptos::prelude::*;
use nebula_core::content::CarModel;
use nebula_core::{Anchor, RevealSpec, SiteConfig};

use crate::components::{reveal_spec, Reveal};

#[component]
pub fn Models(heading: &'static str, models: [CarModel; 3]) -> impl IntoView {
    let config = expect_context::<ReadSignal<SiteConfig>>();

    view! {
        <section id={Anchor::Models.id()} class="section section-alt">
            <div class="container">
                <h3 class="section-title">{heading}</h3>
                <div class="grid-3">
                    {models
                        .into_iter()
                        .enumerate()
                        .map(|(i, model)| {
                            view! {
                                <Reveal spec={reveal_spec(config, move |r| RevealSpec::card(r, i))} class="model-card">
                                    <img src=model.image alt=model.name class="model-image" />
                                    <h4 class="card-title">{model.name}</h4>
                                    <p class="card-text">{model.description}</p>
                                    <button class="btn btn-outline">"Explore"</button>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
