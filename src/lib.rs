//! # monmagasin-ui
//!
//! Leptos + WASM widget layer for the MonMagasin storefront. The shop pages
//! are server-rendered; this crate hydrates the live pieces on top of them:
//! the cart count badge, the notification bell, and the floating multi-window
//! seller chat dock.
//!
//! All recurring fetches are driven by the central scheduler in [`poll`];
//! all state lives in the plain structs under [`state`], which components
//! hold in `RwSignal` contexts and which are unit-tested headlessly.

pub mod app;
pub mod components;
pub mod net;
pub mod poll;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the widget layer.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
