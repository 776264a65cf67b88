//! # filmcast-client
//!
//! Leptos frontend for the FilmCast Pro marketing site: a page shell that
//! switches between home, pricing, registration, sign-in, browse and about
//! pages held in memory, plus the content catalogs those pages render.
//!
//! Built as an `rlib` with the `ssr` feature for the server and as a WASM
//! `cdylib` with the `hydrate` feature for the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client runtime to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
