//! # portfolio-client
//!
//! Leptos + WASM frontend for the design portfolio. Renders the portfolio
//! index and the Ellie & Piper balloon landing page entirely in the browser.
//!
//! Modules without browser dependencies (`routes`, `navigation`, `catalog`)
//! compile natively and are shared with the static host.

pub mod app;
pub mod catalog;
pub mod components;
pub mod glyphs;
pub mod navigation;
pub mod pages;
pub mod routes;

/// Browser entry point: install panic and console logging hooks, report any
/// catalog problems, then mount `App` on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        log::warn!("console logger already installed");
    }

    for issue in catalog::validate() {
        log::warn!("catalog: {issue}");
    }

    log::info!("mounting portfolio ({} designs)", catalog::DESIGNS.len());
    leptos::mount::mount_to_body(app::App);
}
