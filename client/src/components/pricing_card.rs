//! Card for a single subscription tier.
//!
//! Free tiers show a bare price and "Get Started Free"; paid tiers add the
//! billing period and offer a trial. Every card leads to registration.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::data::pricing::PricingTier;
use crate::state::nav::Page;
use crate::util::format::{cta_label, portfolio_limit_label, price_label, price_period, tier_title};

#[component]
pub fn PricingCard(tier: PricingTier, on_navigate: Callback<Page>) -> impl IntoView {
    let featured = tier.featured;

    view! {
        <div class="pricing-card" class:pricing-card--featured=featured>
            <Show when=move || featured>
                <div class="pricing-card__badge">
                    <Icon kind=IconKind::Star modifiers="icon--sm"/>
                    "Most Popular"
                </div>
            </Show>

            <div class="pricing-card__header">
                <h3 class="pricing-card__name">{tier_title(tier.name)}</h3>
                <div class="pricing-card__price">
                    <span class="pricing-card__amount">{price_label(tier.price)}</span>
                    {price_period(tier.price).map(|period| view! { <span class="pricing-card__period">{period}</span> })}
                </div>
                <p class="pricing-card__limit">{portfolio_limit_label(tier.portfolio_limit)}</p>
            </div>

            <ul class="pricing-card__features">
                {tier
                    .features
                    .iter()
                    .copied()
                    .map(|feature| {
                        view! {
                            <li class="pricing-card__feature">
                                <Icon kind=IconKind::Check modifiers="text-accent"/>
                                <span>{feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <button
                class="btn btn--block"
                class:btn--primary=featured
                class:btn--secondary={!featured}
                on:click=move |_| on_navigate.run(Page::Register)
            >
                {cta_label(tier.price)}
            </button>
        </div>
    }
}
