//! Common test utilities: configuration builders and a recording backend.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use spreadview::layout::{CanvasSize, Rect, Size};
use spreadview::render::{ImageSize, RenderBackend};
use spreadview::{Configuration, Result, ViewerError};

/// Series id used by every fixture.
pub const SERIES: &str = "S";

/// Plain left-to-right, single-page configuration with `pages` pages.
#[must_use]
pub fn config(pages: usize) -> Configuration {
    Configuration {
        page_count: pages,
        series_id: SERIES.to_string(),
        ..Configuration::default()
    }
}

/// Configuration with the given layout flags.
#[must_use]
pub fn config_with(pages: usize, spread: bool, r2l: bool, pageshift: bool) -> Configuration {
    Configuration {
        spread,
        r2l,
        pageshift,
        ..config(pages)
    }
}

/// `/img/S/<n>`
#[must_use]
pub fn page(n: usize) -> Option<String> {
    Some(format!("/img/{SERIES}/{n}"))
}

/// Image stand-in with a fixed natural size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FakeImage {
    pub id: u32,
    pub width: f64,
    pub height: f64,
}

impl FakeImage {
    pub fn new(id: u32, width: f64, height: f64) -> Self {
        Self { id, width, height }
    }
}

impl ImageSize for FakeImage {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Backend that records draw calls instead of painting.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub width: f64,
    pub height: f64,
    pub draws: Vec<(u32, Rect)>,
    pub fail_draws: bool,
}

impl RecordingBackend {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl RenderBackend for RecordingBackend {
    type Image = FakeImage;

    fn resize(&mut self, canvas: &CanvasSize) -> Result<()> {
        self.width = canvas.width;
        self.height = canvas.height;
        self.draws.clear();
        Ok(())
    }

    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn draw_image(&mut self, image: &FakeImage, rect: Rect) -> Result<()> {
        if self.fail_draws {
            return Err(ViewerError::Dom("drawImage failed".to_string()));
        }
        self.draws.push((image.id, rect));
        Ok(())
    }
}

/// Approximate float equality for layout assertions.
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
