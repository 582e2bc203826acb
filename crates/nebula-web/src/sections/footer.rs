//! Footer

use leptos::prelude::*;
use nebula_core::content::Footer as FooterContent;

use crate::dom;

#[component]
pub fn Footer(brand: &'static str, content: FooterContent) -> impl IntoView {
    let year = dom::current_year();

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <h2 class="brand">{brand}</h2>
                        <p class="footer-tagline">{content.tagline}</p>
                    </div>
                    <nav>
                        <ul class="footer-links">
                            {content
                                .links
                                .into_iter()
                                .map(|label| view! { <li><a href="#" class="footer-link">{label}</a></li> })
                                .collect_view()}
                        </ul>
                    </nav>
                </div>
                <div class="footer-bottom">
                    "© " {year} " "
                    <a href=content.owner_url class="footer-owner">{content.owner}</a>
                    ". All rights reserved."
                </div>
            </div>
        </footer>
    }
}
