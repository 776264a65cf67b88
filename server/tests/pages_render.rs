//! Server-side render checks for the page shell dispatch.
//!
//! Each page is rendered to HTML exactly as the SSR handler would, inside a
//! fresh reactive owner, and inspected for its distinguishing content.

use client::app::{PageShell, navigator, render_page};
use client::data::about::{TEAM, VALUES};
use client::data::browse::PROFESSIONALS;
use client::data::pricing::{PRICING_TIERS, PortfolioLimit};
use client::state::nav::{NavState, Page};
use leptos::prelude::*;

fn render(page: Page) -> String {
    let owner = Owner::new_root(None);
    owner.with(|| {
        let on_navigate = Callback::new(|_: Page| {});
        render_page(page, on_navigate).to_html()
    })
}

fn render_shell() -> String {
    let owner = Owner::new_root(None);
    owner.with(|| view! { <PageShell/> }.to_html())
}

#[test]
fn every_page_renders_distinguishing_heading() {
    let expected = [
        (Page::Home, "Film Industry Talent"),
        (Page::Pricing, "Choose Your Plan"),
        (Page::Register, "Create Your Account"),
        (Page::Login, "Welcome Back"),
        (Page::Browse, "Discover Film Professionals"),
        (Page::About, "Our Mission"),
    ];
    for (page, marker) in expected {
        let html = render(page);
        assert!(html.contains(marker), "{page} missing {marker:?}");
    }
}

#[test]
fn pages_do_not_render_each_others_headings() {
    let html = render(Page::Login);
    assert!(!html.contains("Choose Your Plan"));
    assert!(!html.contains("Create Your Account"));
}

#[test]
fn unknown_id_renders_home() {
    let html = render(Page::from_id("nonexistent"));
    assert!(html.contains("Film Industry Talent"));
    assert!(!html.contains("Choose Your Plan"));
}

#[test]
fn shell_starts_on_home() {
    let html = render_shell();
    assert!(html.contains("Film Industry Talent"));
    assert!(html.contains("site-header"));
}

#[test]
fn pricing_renders_each_configured_tier() {
    let html = render(Page::Pricing);
    assert_eq!(html.matches("pricing-card__name").count(), PRICING_TIERS.len());
    for tier in PRICING_TIERS {
        let price = format!("${}", tier.price);
        assert!(html.contains(&price), "missing price {price}");
    }
    assert!(html.contains("Most Popular"));
}

#[test]
fn pricing_call_to_action_matches_price() {
    let html = render(Page::Pricing);
    let free = PRICING_TIERS.iter().filter(|t| t.price == 0).count();
    let paid = PRICING_TIERS.len() - free;
    assert_eq!(html.matches("Get Started Free").count(), free);
    assert_eq!(html.matches("Start Free Trial").count(), paid);
    assert_eq!(html.matches("/month").count(), paid);
}

#[test]
fn pricing_portfolio_limits() {
    let html = render(Page::Pricing);
    for tier in PRICING_TIERS {
        match tier.portfolio_limit {
            PortfolioLimit::Unlimited => assert!(html.contains("Unlimited portfolio items")),
            PortfolioLimit::Limited(n) => {
                let text = format!("Up to {n} portfolio items");
                assert!(html.contains(&text), "missing {text:?}");
            }
        }
    }
}

#[test]
fn about_renders_team_and_values() {
    let html = render(Page::About);
    for member in TEAM {
        assert!(html.contains(member.name), "missing {}", member.name);
    }
    for value in VALUES {
        assert!(html.contains(value.title), "missing {}", value.title);
    }
    assert!(html.contains("10,000+"));
}

#[test]
fn browse_renders_every_professional() {
    let html = render(Page::Browse);
    for professional in PROFESSIONALS {
        assert!(html.contains(professional.name), "missing {}", professional.name);
    }
}

#[test]
fn navigating_to_register_from_any_page_renders_register() {
    for start in Page::ALL {
        let owner = Owner::new_root(None);
        let html = owner.with(|| {
            let nav = RwSignal::new(NavState { current: start });
            let on_navigate = navigator(nav);
            on_navigate.run(Page::Register);
            assert_eq!(nav.get_untracked().current, Page::Register, "from {start}");
            render_page(nav.get_untracked().current, on_navigate).to_html()
        });
        assert!(html.contains("Create Your Account"), "from {start}");
    }
}

#[test]
fn navigating_to_current_page_keeps_state() {
    let owner = Owner::new_root(None);
    owner.with(|| {
        let nav = RwSignal::new(NavState { current: Page::Pricing });
        let on_navigate = navigator(nav);
        on_navigate.run(Page::Pricing);
        assert_eq!(nav.get_untracked(), NavState { current: Page::Pricing });

        on_navigate.run(Page::About);
        on_navigate.run(Page::About);
        assert_eq!(nav.get_untracked().current, Page::About);
    });
}
