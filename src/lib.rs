//! AI That Cares - marketing landing page
//!
//! Server-rendered with Leptos and hydrated in the browser, where feature cards
//! and testimonials animate in the first time they scroll into view.

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
