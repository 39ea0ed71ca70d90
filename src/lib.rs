//! Waitlist - Landing page with lead capture
//!
//! A single-page marketing site that collects qualified leads into a
//! `subscribers` store, built with Leptos and WebAssembly. The same crate
//! serves the page and the `POST /api/subscribe` endpoint.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
