//! # client
//!
//! Leptos + WASM frontend for email/password auth against a remote auth
//! service. It signs users up or in, restores their session from the
//! refresh cookie once per page load, and gates the landing page on the
//! access token's expiry.
//!
//! This crate contains pages, components, session state, token inspection
//! and the REST client for the auth service.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
