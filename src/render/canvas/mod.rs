//! Canvas 2D rendering backend.
//!
//! Draws decoded page images onto an `HtmlCanvasElement` via web-sys.

mod renderer;

pub use renderer::CanvasRenderer;
