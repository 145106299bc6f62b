#![allow(warnings)]
//! Sense Studio Console Frontend Entry Point
//!
//! The console pages are rendered by the server; this binary mounts the
//! interactive widgets into their placeholders.

mod models;
mod error;
mod config;
mod sequencer;
mod commands;
mod validation;
mod dom;
mod store;
mod components;
mod widgets;

use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let cfg = config::init(AppConfig::from_document());
    if let Err(err) = rolling_logger::init(cfg.log_level, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already set: {}", err).into());
    }
    log::info!("[startup] api base {:?}", cfg.api_base);

    if let Err(err) = dom::suppress_enter_in_text_inputs() {
        log::warn!("[startup] enter suppression not installed: {:?}", err);
    }
    let mounted = widgets::mount_all();
    log::info!("[startup] mounted {} widgets", mounted);
}
