//! # courtside
//!
//! Leptos + WASM frontend for the Courtside sports-statistics dashboard.
//! Displays NBA/football/cricket game results, the NBA player roster, and
//! stadium information served by the backend REST API, behind a
//! username/password login flow.
//!
//! This crate contains pages, components, the auth/session layer, network
//! types, and shared client state. The `hydrate` feature builds the browser
//! bundle; the `ssr` feature exposes the HTML shell for an external
//! `leptos_axum` host.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
