//! Compiled-in content catalogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the pages display lives here as `&'static` constants. Nothing is
//! fetched, created or mutated at run time, so pages stay pure functions of
//! these tables plus the navigation callback.

pub mod about;
pub mod browse;
pub mod home;
pub mod pricing;
