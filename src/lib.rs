//! # pricebatch
//!
//! Leptos + WASM demo page with two independent widgets: a price form whose
//! inputs cross-validate through the browser's constraint validation API, and
//! a counter that applies batches of unit reducer dispatches.
//!
//! Widget state and transition logic live in [`state`] and are plain Rust;
//! [`components`] wrap them in signals; [`util`] holds the browser glue. The
//! constraint model itself is the sibling `validity` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// WASM entry point: read the page config, start logging, mount the shell.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    let (config, rejected) = config::load();
    let level = config.level().unwrap_or(log::Level::Debug);
    util::logging::init(level);
    if let Some(err) = rejected {
        log::warn!("using default config: {err}");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
