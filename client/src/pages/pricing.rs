//! Subscription plans and billing FAQ.

use leptos::prelude::*;

use crate::components::pricing_card::PricingCard;
use crate::data::pricing::{FAQ_ENTRIES, PRICING_TIERS};
use crate::state::nav::Page;

#[component]
pub fn PricingPage(on_navigate: Callback<Page>) -> impl IntoView {
    view! {
        <div class="page page--pricing section">
            <div class="container">
                <div class="page-intro">
                    <h1 class="page-intro__title">"Choose Your Plan"</h1>
                    <p class="page-intro__lead">
                        "Select the perfect plan to showcase your talent and connect with industry professionals. Upgrade or downgrade at any time."
                    </p>
                </div>

                <div class="grid grid--3 pricing-grid">
                    {PRICING_TIERS
                        .iter()
                        .map(|tier| view! { <PricingCard tier={*tier} on_navigate=on_navigate/> })
                        .collect_view()}
                </div>

                <div class="faq">
                    <h2 class="faq__title">"Frequently Asked Questions"</h2>
                    <div class="grid grid--2 faq__grid">
                        {FAQ_ENTRIES
                            .iter()
                            .map(|entry| {
                                view! {
                                    <div class="faq__item">
                                        <h3 class="faq__question">{entry.question}</h3>
                                        <p class="faq__answer">{entry.answer}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
