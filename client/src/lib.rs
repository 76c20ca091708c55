//! # client
//!
//! Leptos + WASM frontend for the Evolve Mindset Coaching site.
//!
//! This crate contains the single home page, its section components, the
//! three page-local state containers (mobile nav, bio modal, contact form),
//! the typed site copy, and small browser helpers (scroll lock, modal
//! session, dev smoke checks). The `server` crate renders it with SSR and
//! serves the hydrate bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger init failed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
