//! # client
//!
//! Leptos + WASM frontend for the bankgate sign-in flow.
//!
//! This crate contains the login and registration pages, the shared form
//! state machine, field validation, and the route table. All form logic is
//! local: nothing here talks to a backend.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
