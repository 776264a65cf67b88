//! Navigation state for the page shell.
//!
//! DESIGN
//! ======
//! Pages form a closed set, so the shell dispatches on an enum rather than a
//! string. String tags only exist at the boundary (`Page::from_id`), where any
//! unknown tag resolves to `Page::Home`. The state is never persisted: every
//! fresh load starts on the home page.

use std::fmt;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A page the shell can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Pricing,
    Register,
    Login,
    Browse,
    About,
}

impl Page {
    /// Every page, in declaration order.
    pub const ALL: [Page; 6] = [Page::Home, Page::Pricing, Page::Register, Page::Login, Page::Browse, Page::About];

    /// Stable string tag for this page.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Pricing => "pricing",
            Page::Register => "register",
            Page::Login => "login",
            Page::Browse => "browse",
            Page::About => "about",
        }
    }

    /// Label shown in navigation chrome.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Pricing => "Pricing",
            Page::Register => "Join Now",
            Page::Login => "Sign In",
            Page::Browse => "Browse Talent",
            Page::About => "About",
        }
    }

    /// Strict tag lookup. Tags are matched exactly (lowercase, no padding).
    pub fn parse(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }

    /// Tag lookup that falls back to `Page::Home` for anything unrecognized.
    ///
    /// The UI navigates with `Page` values directly; this is the string-tag
    /// form for callers holding a raw identifier.
    pub fn from_id(id: &str) -> Page {
        Page::parse(id).unwrap_or_default()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Pages linked from the header's navigation bar.
///
/// `Login` and `Register` are reached through the header's account buttons
/// instead.
pub fn nav_items() -> [Page; 4] {
    [Page::Home, Page::Browse, Page::Pricing, Page::About]
}

/// The shell's navigation state. One instance per running app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub current: Page,
}

impl NavState {
    /// Switch to `page`. Returns `true` when the page actually changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.current == page {
            return false;
        }
        self.current = page;
        true
    }

    /// Switch by string tag, falling back to home for unknown tags.
    /// String-tag counterpart of `navigate`; the shell itself never needs it.
    /// Returns the page that is now current.
    pub fn set_page_id(&mut self, id: &str) -> Page {
        let page = Page::from_id(id);
        self.navigate(page);
        page
    }

    pub fn is_current(&self, page: Page) -> bool {
        self.current == page
    }
}
