//! Scroll reset after page switches.
//!
//! The shell swaps page content in place, so the browser keeps the previous
//! scroll offset unless it is reset. SSR and native test builds no-op.

/// Scroll the window back to the top of the document.
pub fn to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Instant);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;
