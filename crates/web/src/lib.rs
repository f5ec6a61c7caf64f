// =============================================================================
// Interactive Studios Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. Logging
// 4. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use error::SiteError;
pub use routes::Page;
pub use state::{Navigator, ShellState};

// -----------------------------------------------------------------------------
// 3. Logging
// -----------------------------------------------------------------------------

/// Route the `log` facade to the browser console.
pub fn init_logging(level: log::Level) -> Result<(), SiteError> {
    console_log::init_with_level(level)?;
    Ok(())
}

/// Install the panic hook and logger, then mount the app to `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::new();
    if let Err(e) = init_logging(config.log_level) {
        web_sys::console::warn_1(&e.to_string().into());
    }

    log::info!("Starting {}...", config.brand);
    leptos::mount::mount_to_body(App);
}

// -----------------------------------------------------------------------------
// 4. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    start();
}
