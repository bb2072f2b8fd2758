#![allow(warnings)]
//! Layered UI Entry Point

mod models;
mod defaults;
mod ids;
mod editor;
mod store;
mod render;
mod motion;
mod commands;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

/// Lines kept by the in-memory log ring
const LOG_CAPACITY: usize = 256;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = match ring_logger::init(level, LOG_CAPACITY) {
        Ok(logger) => Some(logger),
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
            None
        }
    };
    log::info!("[APP] Mounting");

    mount_to_body(move || {
        if let Some(logger) = logger {
            provide_context(logger);
        }
        view! { <App /> }
    });
}
