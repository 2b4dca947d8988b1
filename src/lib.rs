//! # chat-client
//!
//! Leptos + WASM frontend navigation layer for the chat application.
//!
//! This crate holds the route table mapping paths to the login, register
//! and chat views, the entry guard that keeps the chat view from being
//! entered without a username, and the navigator that ties the two to the
//! browser's persisted identity.

pub mod app;
pub mod config;
pub mod error;
pub mod guard;
pub mod identity;
pub mod navigator;
pub mod pages;
pub mod routes;

/// WASM entry point: installs the panic hook and console logger, then
/// mounts the app. Navigation reads `localStorage`, so it is resolved in
/// the browser only.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Only fails when a logger is already installed, which keeps logging intact.
    console_log::init_with_level(level).ok();
    leptos::mount::mount_to_body(app::App);
}
