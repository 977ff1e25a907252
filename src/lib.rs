//! # loom-client
//!
//! Leptos + WASM frontend for the Loom chat application.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST session helpers. Guest accounts are chat-only; the
//! [`util::guest`] helpers decide whether the current user may use a gated
//! feature and raise the "create an account" toast when not.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
