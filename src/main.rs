//! Diia Documents Frontend Entry Point

mod api;
mod app;
mod carousel;
mod components;
mod config;
mod context;
mod documents;
mod error;
mod identifier;
mod loader;
mod models;
mod signature;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use wasm_bindgen::prelude::wasm_bindgen;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let _ = rolling_logger::init(level, rolling_logger::DEFAULT_CAPACITY);

    mount_to_body(App);
}

/// Recent log lines, newline separated. Call from devtools as
/// `wasmBindings.recent_logs()`.
#[wasm_bindgen]
pub fn recent_logs() -> String {
    rolling_logger::recent_lines().join("\n")
}
