use super::*;

// =============================================================
// Page tags
// =============================================================

#[test]
fn page_default_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

#[test]
fn page_ids_round_trip_through_parse() {
    for page in Page::ALL {
        assert_eq!(Page::parse(page.id()), Some(page));
    }
}

#[test]
fn page_ids_are_the_closed_set() {
    let ids: Vec<&str> = Page::ALL.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["home", "pricing", "register", "login", "browse", "about"]);
}

#[test]
fn from_id_unknown_falls_back_to_home() {
    assert_eq!(Page::from_id("nonexistent"), Page::Home);
    assert_eq!(Page::from_id(""), Page::Home);
}

#[test]
fn from_id_is_case_and_whitespace_strict() {
    assert_eq!(Page::parse("Pricing"), None);
    assert_eq!(Page::parse(" pricing "), None);
    assert_eq!(Page::from_id("PRICING"), Page::Home);
}

#[test]
fn page_display_prints_id() {
    assert_eq!(Page::Browse.to_string(), "browse");
}

#[test]
fn nav_items_exclude_account_pages() {
    let items = nav_items();
    assert!(!items.contains(&Page::Login));
    assert!(!items.contains(&Page::Register));
    assert_eq!(items[0], Page::Home);
}

// =============================================================
// NavState transitions
// =============================================================

#[test]
fn nav_state_starts_on_home() {
    let state = NavState::default();
    assert_eq!(state.current, Page::Home);
    assert!(state.is_current(Page::Home));
}

#[test]
fn navigate_reports_change() {
    let mut state = NavState::default();
    assert!(state.navigate(Page::Pricing));
    assert_eq!(state.current, Page::Pricing);
    assert!(!state.navigate(Page::Pricing));
}

#[test]
fn navigate_to_register_from_any_page() {
    for start in Page::ALL {
        let mut state = NavState { current: start };
        state.navigate(Page::Register);
        assert_eq!(state.current, Page::Register, "from {start}");
    }
}

#[test]
fn set_page_id_resolves_known_tags() {
    let mut state = NavState::default();
    assert_eq!(state.set_page_id("about"), Page::About);
    assert_eq!(state.current, Page::About);
}

#[test]
fn set_page_id_unknown_tag_returns_to_home() {
    let mut state = NavState { current: Page::Browse };
    assert_eq!(state.set_page_id("nonexistent"), Page::Home);
    assert_eq!(state.current, Page::Home);
}
