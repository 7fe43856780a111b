use leptos::*;

mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting SecureDoc console (wasm)");

    // window.__SECUREDOC_ENV (env.js) takes precedence over ./config.json.
    spawn_local(config::init());

    router::mount_app();
}
