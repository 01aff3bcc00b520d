//! # ui-primitives
//!
//! Presentational Leptos components: a gradient-bordered frame, a loading
//! skeleton layout, and a static invite page, plus the class-merge helper and
//! skeleton block they are built from.
//!
//! Build with `--features ssr` for server rendering or `--features hydrate`
//! for the WASM bundle.
//!
//! TESTING
//! =======
//! A plain `cargo test` covers the pure class and layout helpers. Render
//! tests (frame layering, empty children, caller classes, byte-identical
//! output) go through `RenderHtml::to_html` and only run with
//! `cargo test --features ssr`.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: hydrate the server-rendered [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating ui-primitives showcase");
    leptos::mount::hydrate_body(app::App);
}
