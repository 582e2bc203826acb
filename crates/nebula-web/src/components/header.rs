//! Header component

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use nebula_core::{Anchor, HeaderFade, NavController, RevealSpec, ScrollMetrics, SiteConfig};

use super::icons::{CloseIcon, MenuIcon};
use super::reveal::Intro;
use crate::dom::DomScroller;

/// Fixed header with brand, fading background, and the responsive nav menu
#[component]
pub fn Header(
    nav: RwSignal<NavController>,
    scroll: ReadSignal<ScrollMetrics>,
    config: ReadSignal<SiteConfig>,
    brand: &'static str,
) -> impl IntoView {
    let background = Memo::new(move |_| {
        HeaderFade::from_config(&config.get())
            .color_for(&scroll.get())
            .to_css()
    });
    let menu_open = move || nav.with(|n| n.menu_open());

    let on_navigate = move |anchor: Anchor| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            nav.update(|n| {
                n.navigate_to(anchor, &DomScroller);
            });
        }
    };

    view! {
        <header class="site-header" style:background-color=move || background.get()>
            <div class="container header-inner">
                <Intro spec={RevealSpec::header_logo()}>
                    <h1 class="brand">{brand}</h1>
                </Intro>
                <nav>
                    <button
                        class="menu-toggle"
                        on:click=move |_| nav.update(|n| n.toggle_menu())
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                    >
                        {move || {
                            if menu_open() {
                                view! { <CloseIcon /> }.into_any()
                            } else {
                                view! { <MenuIcon /> }.into_any()
                            }
                        }}
                    </button>
                    <Intro spec={RevealSpec::header_nav()}>
                        <ul class="nav-list" class:nav-open=menu_open>
                            {Anchor::ALL
                                .into_iter()
                                .map(|anchor| {
                                    view! {
                                        <li>
                                            <a
                                                href={anchor.href()}
                                                class="nav-link"
                                                on:click={on_navigate(anchor)}
                                            >
                                                {anchor.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Intro>
                </nav>
            </div>
        </header>
    }
}
