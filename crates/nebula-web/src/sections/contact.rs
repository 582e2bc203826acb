//! Contact section
//!
//! Submitting is intercepted; the form goes to the [`ContactSubmitter`] in
//! context (discarding by default) and nothing is sent anywhere.

use std::sync::Arc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use nebula_core::content::ContactCopy;
use nebula_core::{Anchor, ContactForm, ContactSubmitter, DiscardSubmitter};

/// Shared submitter handle provided through Leptos context
#[derive(Clone)]
pub struct SubmitterContext(pub Arc<dyn ContactSubmitter + Send + Sync>);

impl Default for SubmitterContext {
    fn default() -> Self {
        Self(Arc::new(DiscardSubmitter))
    }
}

#[component]
pub fn Contact(content: ContactCopy) -> impl IntoView {
    let submitter = use_context::<SubmitterContext>().unwrap_or_default();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submitter.0.submit(ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        });
    };

    view! {
        <section id={Anchor::Contact.id()} class="section">
            <div class="container">
                <h3 class="section-title">{content.heading}</h3>
                <div class="contact-layout">
                    <div>
                        <p class="contact-intro">{content.intro}</p>
                        <form class="contact-form" on:submit=on_submit>
                            <div class="field">
                                <label for="name">"Name"</label>
                                <input
                                    id="name"
                                    class="input"
                                    placeholder="Your Name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label for="email">"Email"</label>
                                <input
                                    id="email"
                                    type="email"
                                    class="input"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label for="message">"Message"</label>
                                <textarea
                                    id="message"
                                    class="input"
                                    placeholder="Your message"
                                    rows="4"
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button type="submit" class="btn">"Send Message"</button>
                        </form>
                    </div>
                    <div class="contact-media">
                        <img src=content.image alt=content.image_alt class="rounded shadow" />
                    </div>
                </div>
            </div>
        </section>
    }
}
