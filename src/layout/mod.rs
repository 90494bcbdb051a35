//! Layout geometry for the page canvas.
//!
//! This module handles:
//! - Sizing the canvas backing store from the browser viewport
//! - Deciding whether the canvas is wide enough for a spread
//! - Placing one or two pages on the canvas, preserving aspect ratio

mod compose;
mod viewport;

pub use compose::{compose, Composition, Rect, Size, Slot};
pub use viewport::{CanvasSize, EXPANSION, MIN_SPREAD_ASPECT, VIEWPORT_MARGIN};
