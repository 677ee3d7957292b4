//! # client
//!
//! Leptos + WASM frontend for the Quran chapter index.
//!
//! This crate contains the pages, presentational components, view state and
//! network helpers, plus the wire schema shared with the `server` crate's
//! upstream client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point for the WASM bundle.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
