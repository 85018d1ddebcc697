//! # cluster-console
//!
//! Leptos panels for a cluster-management console: an editable node pool
//! list with a live monthly estimate, and a telemetry overview where one
//! time-range selection drives every metric graph.
//!
//! The edit workflow and time-window logic live in `state` as plain Rust and
//! are tested natively. `components` wraps them in signals; `net` holds the
//! contract with the pool update API.

pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// Route panics and log records to the browser console.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_console_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
