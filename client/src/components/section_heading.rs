//! Centered section title with an optional lead paragraph.

use leptos::prelude::*;

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="section-heading__title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-heading__subtitle">{text}</p> })}
        </div>
    }
}
