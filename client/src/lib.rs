//! # client
//!
//! Leptos + WASM frontend for SafeText: the landing page with the live
//! text-analysis demo and the account registration form.
//!
//! Form rules and the submission lifecycle live in the `registration` crate;
//! this crate renders them and supplies the browser-side collaborators
//! (timers, HTTP).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
