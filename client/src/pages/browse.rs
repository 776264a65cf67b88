//! Public talent directory preview.
//!
//! The search box and category chips are display only; the grid always shows
//! the full featured list.

use leptos::prelude::*;

use crate::components::cta_banner::CtaBanner;
use crate::components::icon::{Icon, IconKind};
use crate::components::profile_card::ProfileCard;
use crate::data::browse::{CATEGORIES, PROFESSIONALS};
use crate::state::nav::Page;

#[component]
pub fn BrowsePage(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <div class="page page--browse">
            <section class="section">
                <div class="container">
                    <div class="page-intro">
                        <h1 class="page-intro__title">"Discover Film Professionals"</h1>
                        <p class="page-intro__lead">
                            "Explore portfolios from actors, directors, crew and creative services around the world."
                        </p>
                    </div>

                    <div class="browse-toolbar">
                        <label class="search-field">
                            <Icon kind=IconKind::Search modifiers="search-field__icon"/>
                            <input
                                class="search-field__input"
                                type="search"
                                placeholder="Search by name, role or location"
                                aria-label="Search professionals"
                            />
                        </label>
                        <div class="chip-row">
                            {CATEGORIES
                                .iter()
                                .enumerate()
                                .map(|(i, category)| {
                                    view! {
                                        <span class="chip" class:chip--active={i == 0}>{*category}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="grid grid--3">
                        {PROFESSIONALS
                            .iter()
                            .map(|professional| {
                                view! { <ProfileCard professional={*professional} on_navigate=on_navigate/> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Want to Connect?"
                body="Create a free account to message professionals and publish your own portfolio."
                button_label="Join to Connect"
                target=Page::Register
                on_navigate=on_navigate
            />
        </div>
    }
}
