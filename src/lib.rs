pub mod app;
pub mod assets;
pub mod components;
pub mod content;
pub mod hooks;
pub mod models;
pub mod motion;
pub mod pages;
pub mod state;

#[cfg(feature = "ssr")]
pub mod config;

// Re-export for convenience
pub use app::App;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    #[test]
    fn browser_build_installs_a_log_subscriber() {
        let manifest = include_str!("../Cargo.toml");
        let hydrate = manifest
            .split("hydrate = [")
            .nth(1)
            .and_then(|rest| rest.split(']').next())
            .unwrap_or_default();
        assert!(hydrate.contains("\"tracing-wasm\""), "{hydrate}");
    }
}
