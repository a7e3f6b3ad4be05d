pub mod api;
pub mod common;
pub mod frontend;
pub mod models;
pub mod services;
pub mod types;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already initialised: {e}").into());
    }

    log::info!("Hydrating Tourbook");
    leptos::mount::hydrate_body(frontend::App);
}
