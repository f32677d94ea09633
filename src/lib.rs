//! # pawmart-client
//!
//! Leptos + WASM frontend for the Pawmart pet marketplace.
//!
//! Most of the crate is storefront rendering and thin REST wrappers; the
//! load-bearing subsystem is session management and role-based route
//! authorization: `state::session` holds the one shared session record,
//! `net::gateway` attaches credentials and reacts to authorization failures,
//! `util::auth` reconciles the session with the backend, and
//! `components::route_guard` gates every protected page on `policy`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod policy;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
