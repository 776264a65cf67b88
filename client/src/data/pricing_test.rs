use super::*;

#[test]
fn tiers_are_ordered_by_price() {
    let prices: Vec<u32> = PRICING_TIERS.iter().map(|t| t.price).collect();
    let mut sorted = prices.clone();
    sorted.sort_unstable();
    assert_eq!(prices, sorted);
}

#[test]
fn exactly_one_tier_is_featured() {
    assert_eq!(PRICING_TIERS.iter().filter(|t| t.featured).count(), 1);
}

#[test]
fn first_tier_is_free_and_limited() {
    let basic = &PRICING_TIERS[0];
    assert!(basic.is_free());
    assert_eq!(basic.portfolio_limit, PortfolioLimit::Limited(5));
}

#[test]
fn top_tier_is_unlimited() {
    let premium = PRICING_TIERS.last().unwrap();
    assert_eq!(premium.portfolio_limit, PortfolioLimit::Unlimited);
    assert!(!premium.is_free());
}

#[test]
fn tier_names_are_unique() {
    for (i, a) in PRICING_TIERS.iter().enumerate() {
        for b in &PRICING_TIERS[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn every_tier_lists_features() {
    assert!(PRICING_TIERS.iter().all(|t| !t.features.is_empty()));
}

#[test]
fn faq_has_four_entries() {
    assert_eq!(FAQ_ENTRIES.len(), 4);
    assert_eq!(FAQ_ENTRIES[1].question, "Is there a free trial?");
}
