//! # bazaar-client
//!
//! Leptos + WASM storefront frontend: product browsing, shopping cart,
//! auction bidding, and JWT-based authentication against the bazaar REST
//! backend.
//!
//! This crate contains pages, components, application state, network types,
//! and the session lifecycle client that owns token refresh scheduling and
//! route gating.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
