//! Page enhancements for the Robert Tattoo website, compiled to WebAssembly.
//!
//! The page markup is served as plain HTML; this crate attaches to it once
//! the document is parsed and adds the particles, reveal animations,
//! counters, lightbox, notifications and the WhatsApp booking action.

pub mod components;
pub mod config;
pub mod effects;
pub mod error;
pub mod pages;
pub mod reveal;
pub mod utils;

/// Sets up logging and enhances the page once the DOM is ready.
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    gloo_console::log!(
        "%c🎨 Robert Tattoo Website",
        "color: #fbbf24; font-size: 20px; font-weight: bold;"
    );
    gloo_console::log!(
        "%c✨ Desenvolvido com amor e dedicação",
        "color: #d97706; font-size: 14px;"
    );

    if let Err(e) = utils::dom::on_dom_ready(pages::landing::init) {
        log::error!("Failed to wait for the page: {}", e);
    }
}
