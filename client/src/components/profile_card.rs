//! Card for a featured professional on the browse page.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::data::browse::Professional;
use crate::state::nav::Page;
use crate::util::format::{portfolio_count_label, rating_label};

#[component]
pub fn ProfileCard(professional: Professional, on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <article class="profile-card">
            <img class="profile-card__image" src={professional.image} alt={professional.name} loading="lazy"/>
            <div class="profile-card__body">
                <div class="profile-card__title-row">
                    <h3 class="profile-card__name">{professional.name}</h3>
                    <span class="profile-card__rating">
                        <Icon kind=IconKind::Star modifiers="icon--sm text-accent"/>
                        {rating_label(professional.rating)}
                    </span>
                </div>
                <p class="profile-card__role">{professional.role}</p>
                <p class="profile-card__meta">
                    <Icon kind=IconKind::MapPin modifiers="icon--sm"/>
                    {professional.location}
                </p>
                <p class="profile-card__meta">
                    <Icon kind=IconKind::Film modifiers="icon--sm"/>
                    {portfolio_count_label(professional.portfolio_items)}
                </p>
                // Viewing full profiles requires an account.
                <button class="btn btn--secondary btn--block" on:click=move |_| on_navigate.run(Page::Register)>
                    "View Profile"
                </button>
            </div>
        </article>
    }
}
