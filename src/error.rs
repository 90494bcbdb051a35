//! Structured error types for spreadview.
//!
//! Every fallible operation in the crate returns [`Result`]; the wasm entry
//! points convert [`ViewerError`] into a JavaScript exception.

/// All errors that can occur while configuring, navigating or rendering.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// Position input that is not a number (pagination widget, JS caller).
    #[error("Invalid position: {0:?} is not a number")]
    InvalidPosition(String),

    /// A host page element the viewer depends on is missing.
    #[error("Missing host element: #{0}")]
    MissingElement(String),

    /// A configuration attribute could not be parsed.
    #[error("Invalid attribute {name}={value:?}")]
    Attribute { name: String, value: String },

    /// An image could not be fetched or decoded.
    #[error("Failed to load image {src}: {reason}")]
    ImageLoad { src: String, reason: String },

    /// DOM or Canvas 2D call failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Snapshot serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ViewerError>;

impl From<String> for ViewerError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ViewerError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ViewerError> for wasm_bindgen::JsValue {
    fn from(e: ViewerError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl ViewerError {
    /// Wrap a JavaScript exception value as a DOM error.
    pub(crate) fn from_js(context: &str, value: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{context}: {}", js_message(value)))
    }
}

/// Readable text for a thrown JavaScript value: the `message` of an `Error`
/// (including `DOMException`), the string itself, or its debug form.
#[cfg(target_arch = "wasm32")]
pub fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(error.name());
        let message = String::from(error.message());
        return if message.is_empty() {
            name
        } else {
            format!("{name}: {message}")
        };
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
