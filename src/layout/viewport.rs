//! Canvas sizing from the browser viewport.

use serde::Serialize;

/// Internal canvas pixels per CSS pixel.
pub const EXPANSION: f64 = 3.0;
/// CSS pixels kept free around the canvas so no scrollbars appear.
pub const VIEWPORT_MARGIN: f64 = 10.0;
/// Narrowest canvas (width / height) that still shows two pages.
pub const MIN_SPREAD_ASPECT: f64 = 1.4;

/// Canvas dimensions for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSize {
    /// CSS size in logical pixels.
    pub css_width: f64,
    pub css_height: f64,
    /// Backing store size in canvas pixels (`css * EXPANSION`, floored).
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Size the canvas to the viewport's client area minus the margin.
    pub fn from_viewport(client_width: f64, client_height: f64) -> Self {
        let css_width = (client_width - VIEWPORT_MARGIN).max(0.0);
        let css_height = (client_height - VIEWPORT_MARGIN).max(0.0);
        Self {
            css_width,
            css_height,
            width: (css_width * EXPANSION).floor(),
            height: (css_height * EXPANSION).floor(),
        }
    }

    /// Width over height; 0 for a collapsed canvas.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }

    /// Whether the canvas is wide enough for a two-page spread.
    pub fn allows_spread(&self) -> bool {
        self.aspect_ratio() >= MIN_SPREAD_ASPECT
    }

    /// Backing store size as integers for `canvas.width/height`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_size(&self) -> (u32, u32) {
        let clamp = |v: f64| v.clamp(0.0, f64::from(u32::MAX)) as u32;
        (clamp(self.width), clamp(self.height))
    }

    /// Canvas pixel extent as a layout size.
    pub fn size(&self) -> super::Size {
        super::Size::new(self.width, self.height)
    }
}
