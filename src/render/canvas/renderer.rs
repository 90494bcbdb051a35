//! Canvas 2D rendering backend.
//!
//! Implements the RenderBackend trait using HTML Canvas 2D API via web-sys.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::{Result, ViewerError};
use crate::layout::{CanvasSize, Rect, Size};
use crate::render::backend::{ImageSize, RenderBackend};

const CURSOR_BUSY: &str = "wait";
const CURSOR_IDLE: &str = "auto";

impl ImageSize for HtmlImageElement {
    fn size(&self) -> Size {
        Size::new(
            f64::from(self.natural_width()),
            f64::from(self.natural_height()),
        )
    }
}

/// Canvas 2D surface the pages are drawn on.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self { canvas, ctx })
    }

    /// Set the CSS dimensions of the canvas element (logical pixels).
    fn set_canvas_css_size(&self, css_w: f64, css_h: f64) {
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{css_w}px"));
        let _ = style.set_property("height", &format!("{css_h}px"));
    }
}

impl RenderBackend for CanvasRenderer {
    type Image = HtmlImageElement;

    fn resize(&mut self, canvas: &CanvasSize) -> Result<()> {
        self.set_canvas_css_size(canvas.css_width, canvas.css_height);
        let (width, height) = canvas.pixel_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    fn size(&self) -> Size {
        Size::new(
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    fn draw_image(&mut self, image: &HtmlImageElement, rect: Rect) -> Result<()> {
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
            )
            .map_err(|e| ViewerError::from_js("drawImage", &e))
    }

    fn set_busy(&mut self, busy: bool) {
        let cursor = if busy { CURSOR_BUSY } else { CURSOR_IDLE };
        let _ = self.canvas.style().set_property("cursor", cursor);
    }
}
