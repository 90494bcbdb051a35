//! Letterbox/pillarbox placement of one or two pages on the canvas.
//!
//! Each page keeps its aspect ratio. A pair is scaled to the canvas height
//! and centred horizontally; if the pair is then wider than the canvas, both
//! pages shrink by the same factor so their combined width fits, and the pair
//! is centred vertically instead. A single page fits whichever axis binds.

use serde::Serialize;

/// Width and height in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Non-empty, finite extent that can be scaled.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Width when scaled to `height`.
    fn width_at(&self, height: f64) -> f64 {
        self.width * (height / self.height)
    }

    /// Height when scaled to `width`.
    fn height_at(&self, width: f64) -> f64 {
        self.height * (width / self.width)
    }
}

/// Destination rectangle on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Which of the two requested images a single placement refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    First,
    Second,
}

/// Where to draw what.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Composition {
    /// Nothing drawable.
    Empty,
    Single { slot: Slot, rect: Rect },
    Pair { first: Rect, second: Rect },
}

/// Lay out up to two images (left, right) on a canvas.
///
/// Images with an empty or non-finite size are treated as absent.
pub fn compose(canvas: Size, first: Option<Size>, second: Option<Size>) -> Composition {
    if !canvas.is_drawable() {
        return Composition::Empty;
    }
    let first = first.filter(Size::is_drawable);
    let second = second.filter(Size::is_drawable);

    match (first, second) {
        (Some(a), Some(b)) => compose_pair(canvas, a, b),
        (Some(a), None) => Composition::Single {
            slot: Slot::First,
            rect: compose_single(canvas, a),
        },
        (None, Some(b)) => Composition::Single {
            slot: Slot::Second,
            rect: compose_single(canvas, b),
        },
        (None, None) => Composition::Empty,
    }
}

fn compose_pair(canvas: Size, a: Size, b: Size) -> Composition {
    let w1 = a.width_at(canvas.height);
    let w2 = b.width_at(canvas.height);

    if w1 + w2 > canvas.width {
        // width-limited
        let ratio = canvas.width / (w1 + w2);
        let height = canvas.height * ratio;
        let y = (canvas.height - height) / 2.0;
        Composition::Pair {
            first: Rect::new(0.0, y, w1 * ratio, height),
            second: Rect::new(w1 * ratio, y, w2 * ratio, height),
        }
    } else {
        // height-limited
        let x = (canvas.width - w1 - w2) / 2.0;
        Composition::Pair {
            first: Rect::new(x, 0.0, w1, canvas.height),
            second: Rect::new(x + w1, 0.0, w2, canvas.height),
        }
    }
}

fn compose_single(canvas: Size, image: Size) -> Rect {
    let width = image.width_at(canvas.height);
    if width > canvas.width {
        let height = image.height_at(canvas.width);
        Rect::new(0.0, (canvas.height - height) / 2.0, canvas.width, height)
    } else {
        Rect::new((canvas.width - width) / 2.0, 0.0, width, canvas.height)
    }
}
