//! Inline SVG icon set.
//!
//! DESIGN
//! ======
//! Icons are stroke outlines on a 24x24 grid, drawn with `currentColor` so the
//! surrounding text color themes them. Each kind is a fixed list of path
//! strings; circles are written as two-arc paths.

use leptos::prelude::*;

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    ArrowRight,
    Award,
    Briefcase,
    Check,
    Film,
    Heart,
    Lock,
    Mail,
    MapPin,
    Menu,
    Play,
    Search,
    Star,
    Target,
    User,
    Users,
    X,
}

impl IconKind {
    pub const ALL: [IconKind; 17] = [
        IconKind::ArrowRight,
        IconKind::Award,
        IconKind::Briefcase,
        IconKind::Check,
        IconKind::Film,
        IconKind::Heart,
        IconKind::Lock,
        IconKind::Mail,
        IconKind::MapPin,
        IconKind::Menu,
        IconKind::Play,
        IconKind::Search,
        IconKind::Star,
        IconKind::Target,
        IconKind::User,
        IconKind::Users,
        IconKind::X,
    ];

    /// SVG `d` attributes for this icon.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::Award => &["M18 8a6 6 0 1 1-12 0 6 6 0 0 1 12 0z", "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11"],
            IconKind::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            IconKind::Check => &["M20 6 9 17l-5-5"],
            IconKind::Film => &[
                "M3 3h18v18H3z",
                "M7 3v18",
                "M17 3v18",
                "M3 7.5h4",
                "M3 12h18",
                "M3 16.5h4",
                "M17 7.5h4",
                "M17 16.5h4",
            ],
            IconKind::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            IconKind::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            IconKind::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 6-10 7L2 6",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
            ],
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Play => &["m6 3 14 9-14 9V3z"],
            IconKind::Search => &["M19 11a8 8 0 1 1-16 0 8 8 0 0 1 16 0z", "m21 21-4.3-4.3"],
            IconKind::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            IconKind::Target => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M18 12a6 6 0 1 1-12 0 6 6 0 0 1 12 0z",
                "M14 12a2 2 0 1 1-4 0 2 2 0 0 1 4 0z",
            ],
            IconKind::User => &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z"],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

/// Base class plus any caller-supplied modifiers.
pub fn icon_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { "icon".to_owned() } else { format!("icon {extra}") }
}

/// Decorative icon; hidden from assistive technology.
#[component]
pub fn Icon(kind: IconKind, #[prop(optional, into)] modifiers: String) -> impl IntoView {
    view! {
        <svg
            class={icon_class(&modifiers)}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().copied().map(|d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}
