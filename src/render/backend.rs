//! Render backend trait for pluggable drawing surfaces.
//!
//! The compositor only needs to size a surface, draw a decoded image into a
//! rectangle and flag itself busy. The Canvas 2D backend implements this in
//! the browser; tests implement it with a recording surface.

use crate::error::Result;
use crate::layout::{CanvasSize, Rect, Size};

/// Decoded image with a known pixel size.
pub trait ImageSize {
    /// Natural size in image pixels.
    fn size(&self) -> Size;
}

/// Trait for render backends
///
/// Implementations handle the actual drawing operations for different
/// surfaces (Canvas 2D, test recorders).
pub trait RenderBackend {
    /// Image handle the backend can draw.
    type Image: ImageSize;

    /// Resize the surface. Resizing clears it.
    fn resize(&mut self, canvas: &CanvasSize) -> Result<()>;

    /// Current surface size in canvas pixels.
    fn size(&self) -> Size;

    /// Draw `image` scaled into `rect`.
    fn draw_image(&mut self, image: &Self::Image, rect: Rect) -> Result<()>;

    /// Show or clear the busy indicator while a render is loading.
    fn set_busy(&mut self, _busy: bool) {}
}
