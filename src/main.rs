//! Seat Admin Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod csrf;
mod dom;
mod editor;
mod error;
mod globals;
mod interceptor;
mod layout;
mod models;
mod routes;
mod scope;
mod store;

use app::AdminApp;
use config::AdminConfig;
use context::AdminContext;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {err}").into());
    }

    let config = AdminConfig::load();
    log::set_max_level(config.level_filter());
    log::info!("[APP] Seat admin starting, positions save to {}", config.save_positions_url);

    let ctx = AdminContext::new(config);
    mount_to_body(move || view! { <AdminApp ctx=ctx /> });
}
