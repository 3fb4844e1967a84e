//! # parkspot-client
//!
//! Leptos + WASM frontend for the ParkSpot parking management application.
//! Replaces the Vue 3 `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, application state, the auth API client, and
//! the navigation guard that gates every route transition by session state
//! and role. The backend auth API and durable browser storage are external
//! collaborators reached through `net` and `util::storage`.

pub mod app;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the generated JS shim in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
