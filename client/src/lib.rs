//! # erp-client
//!
//! Leptos + WASM frontend for the inventory and order management system.
//!
//! This crate contains the routed pages, shared components, reactive state
//! (session, theme, query cache, toasts), and the typed REST client. The
//! `server` crate renders it with SSR; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
