//! Technology feature cards

use leptos::prelude::*;
use nebula_core::content::Feature;
use nebula_core::{Anchor, RevealSpec, SiteConfig};

use crate::components::{reveal_spec, FeatureIconView, Reveal};

#[component]
pub fn Technology(heading: &'static str, features: [Feature; 3]) -> impl IntoView {
    let config = expect_context::<ReadSignal<SiteConfig>>();

    view! {
        <section id={Anchor::Technology.id()} class="section">
            <div class="container">
                <h3 class="section-title">{heading}</h3>
                <div class="grid-3">
                    {features
                        .into_iter()
                        .enumerate()
                        .map(|(i, feature)| {
                            view! {
                                <Reveal spec={reveal_spec(config, move |r| RevealSpec::card(r, i))} class="feature-card">
                                    <FeatureIconView icon=feature.icon />
                                    <h4 class="card-title">{feature.title}</h4>
                                    <p class="card-text">{feature.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
