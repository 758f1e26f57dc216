//! # client
//!
//! Leptos + WASM frontend for the "Cadastro Boas Vindas" registration page.
//!
//! The page is server-rendered by the root `boas-vindas` crate (`ssr`
//! feature) and hydrated in the browser (`hydrate` feature). Form rules live
//! in the `registration` crate; this crate renders them and provides the
//! browser HTTP transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
