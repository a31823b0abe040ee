//! # cheftable
//!
//! Leptos + WASM frontend for the ChefTable chef-booking marketplace.
//!
//! Marketing pages render statically; the dashboard pages (orders,
//! documents, bank accounts) fetch everything from the REST backend and
//! hold only transient view state. Business logic lives server-side; this
//! crate fetches, filters client-side, and renders.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hook up panic reporting and console logging, then
/// hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
