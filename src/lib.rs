//! # catalog-ui
//!
//! Leptos + WASM presentation layer for the metadata catalog: the top
//! navigation bar, the sign-in page, the session-expiry watcher, and thin
//! REST wrappers for the KPI resource.
//!
//! Pure state and request-building logic lives in `state`, `routes` and
//! `net` so it can be exercised natively; `components` and `pages` only
//! wire that logic to the reactive graph.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
