//! # client
//!
//! Leptos + WASM frontend for the website generator.
//!
//! This crate contains the route table, pages, components, client-side state,
//! and the JSON API types shared with the Axum server. The server renders it
//! with the `ssr` feature; the browser hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
