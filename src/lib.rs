//! spreadview - paginated image viewer for the web
//!
//! Renders a document's page images onto a Canvas 2D surface via WebAssembly:
//! - Single pages or two-page spreads, letterboxed to the window
//! - Right-to-left reading order
//! - Pageshift (blank leading slot) to fix spread parity
//! - Look-ahead preloading in the reading direction
//! - Click, keyboard, wheel and pagination-slider navigation
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { PageViewer } from 'spreadview';
//! await init();
//! const viewer = new PageViewer();   // reads #data-container, #canvas, ...
//! viewer.pagemove("right");
//! ```
//!
//! All position, layout and input arithmetic lives in plain Rust modules
//! (`navigation`, `pages`, `layout`, `input`) that build and test natively.

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod loader;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use config::{Configuration, HostAttributes, Toggles};
pub use error::{Result, ViewerError};
pub use navigation::{sane_position, Cursor, Direction, Navigation, Snapshot, ViewerState};
pub use pages::{BuiltList, PageList, PagePair, PagingControl};

#[cfg(target_arch = "wasm32")]
pub use viewer::PageViewer;

/// Build the page plan for a configuration and return it as JSON.
///
/// # Errors
/// Returns an error if the configuration is not valid JSON.
#[wasm_bindgen]
pub fn page_plan(config_json: &str) -> std::result::Result<String, JsValue> {
    let plan = plan_from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&plan)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Build the page plan for a configuration object and return it as a `JsValue`.
///
/// # Errors
/// Returns an error if the value does not describe a configuration.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn page_plan_to_js(config: JsValue) -> std::result::Result<JsValue, JsValue> {
    let config: Configuration = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?;
    serde_wasm_bindgen::to_value(&ViewerState::new(config).snapshot())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Snapshot of a freshly opened viewer for a JSON configuration.
///
/// # Errors
/// Returns [`ViewerError::Serialization`] for malformed JSON.
pub fn plan_from_json(config_json: &str) -> Result<Snapshot> {
    let config: Configuration = serde_json::from_str(config_json)?;
    Ok(ViewerState::new(config).snapshot())
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
