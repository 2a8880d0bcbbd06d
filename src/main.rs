//! OrderBot Frontend Entry Point

mod models;
mod error;
mod config;
mod commands;
mod store;
mod context;
mod display;
mod markdown;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
