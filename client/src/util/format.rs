//! Display formatting for prices, plan limits and ratings.

use crate::data::pricing::PortfolioLimit;

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `$n` for a whole-dollar monthly price.
pub fn price_label(price: u32) -> String {
    format!("${price}")
}

/// Billing period suffix shown after a paid price. Free tiers have none.
pub fn price_period(price: u32) -> Option<&'static str> {
    (price > 0).then_some("/month")
}

pub fn portfolio_limit_label(limit: PortfolioLimit) -> String {
    match limit {
        PortfolioLimit::Unlimited => "Unlimited portfolio items".to_owned(),
        PortfolioLimit::Limited(n) => format!("Up to {n} portfolio items"),
    }
}

/// Call-to-action text on a pricing card.
pub fn cta_label(price: u32) -> &'static str {
    if price == 0 { "Get Started Free" } else { "Start Free Trial" }
}

/// Tier names are stored lowercase; cards show them capitalized.
pub fn tier_title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One-decimal review score, e.g. `4.9`.
pub fn rating_label(rating: f32) -> String {
    format!("{rating:.1}")
}

pub fn portfolio_count_label(count: u32) -> String {
    if count == 1 { "1 project".to_owned() } else { format!("{count} projects") }
}
