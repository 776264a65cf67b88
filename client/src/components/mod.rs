//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and repeated content blocks. They receive
//! content and the navigation callback as props; only the header reads shared
//! state from Leptos context.

pub mod cta_banner;
pub mod header;
pub mod icon;
pub mod pricing_card;
pub mod profile_card;
pub mod section_heading;
