//! # client
//!
//! Leptos + WASM frontend for the volunteer matching application.
//!
//! This crate contains pages, components, the auth session state machine,
//! and the REST API layer. The server crate mounts `app::App` for SSR and
//! the browser entry below hydrates it.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
