//! # client
//!
//! Leptos + WASM front end for the EV co-ownership platform.
//!
//! This crate contains the app shell, route layouts, pages and components.
//! Every backend call goes through the `api` crate; this crate only adds the
//! browser transport, reactive state, and markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
