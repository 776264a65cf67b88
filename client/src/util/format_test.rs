use super::*;

// =============================================================
// Pricing
// =============================================================

#[test]
fn price_label_prefixes_dollar_sign() {
    assert_eq!(price_label(0), "$0");
    assert_eq!(price_label(19), "$19");
}

#[test]
fn price_period_only_for_paid_tiers() {
    assert_eq!(price_period(0), None);
    assert_eq!(price_period(1), Some("/month"));
    assert_eq!(price_period(49), Some("/month"));
}

#[test]
fn cta_label_free_vs_paid() {
    assert_eq!(cta_label(0), "Get Started Free");
    assert_eq!(cta_label(19), "Start Free Trial");
}

#[test]
fn portfolio_limit_unlimited_text() {
    assert_eq!(portfolio_limit_label(PortfolioLimit::Unlimited), "Unlimited portfolio items");
}

#[test]
fn portfolio_limit_finite_text() {
    assert_eq!(portfolio_limit_label(PortfolioLimit::Limited(5)), "Up to 5 portfolio items");
    assert_eq!(portfolio_limit_label(PortfolioLimit::Limited(0)), "Up to 0 portfolio items");
}

#[test]
fn tier_title_capitalizes_first_letter() {
    assert_eq!(tier_title("professional"), "Professional");
    assert_eq!(tier_title(""), "");
}

// =============================================================
// Browse cards
// =============================================================

#[test]
fn rating_label_one_decimal() {
    assert_eq!(rating_label(5.0), "5.0");
    assert_eq!(rating_label(4.75), "4.8");
}

#[test]
fn portfolio_count_label_pluralizes() {
    assert_eq!(portfolio_count_label(1), "1 project");
    assert_eq!(portfolio_count_label(12), "12 projects");
}
