//! Rendering with pluggable backends.
//!
//! This module provides:
//! - The backend trait the compositor draws through
//! - The compositor itself (placement + drawing of one or two pages)
//! - Canvas 2D backend (browser only)

pub mod backend;
pub mod compositor;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use backend::{ImageSize, RenderBackend};
pub use compositor::{draw_pair, usable};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
