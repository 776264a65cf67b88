//! Full-width call-to-action band closing most pages.

use leptos::prelude::*;

use crate::state::nav::Page;

#[component]
pub fn CtaBanner(
    #[prop(into)] title: String,
    #[prop(into)] body: String,
    #[prop(into)] button_label: String,
    target: Page,
    on_navigate: Callback<Page>,
) -> impl IntoView {
    view! {
        <section class="cta-banner">
            <div class="container container--narrow">
                <h2 class="cta-banner__title">{title}</h2>
                <p class="cta-banner__body">{body}</p>
                <button class="btn btn--dark btn--lg" on:click=move |_| on_navigate.run(target)>
                    {button_label}
                </button>
            </div>
        </section>
    }
}
