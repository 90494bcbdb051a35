//! Mapping of raw input to viewer actions.
//!
//! Clicks on the left 40% of the canvas page left, clicks on the right 40%
//! page right, the middle does nothing. The wheel pages forward in reading
//! order, so its direction flips for right-to-left documents.

use crate::layout::EXPANSION;
use crate::navigation::Direction;

/// Clicks farther than this share of the width from the right edge page left.
pub const LEFT_ZONE: f64 = 0.6;
/// Clicks closer than this share of the width to the right edge page right.
pub const RIGHT_ZONE: f64 = 0.4;

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Navigate(Direction),
    /// Leave the viewer (browser history back).
    Exit,
}

/// Direction for a click at `x` CSS pixels from the canvas's left edge.
///
/// `canvas_width` is the backing store width in canvas pixels.
pub fn click_direction(canvas_width: f64, x: f64) -> Option<Direction> {
    let from_right = canvas_width - x * EXPANSION;
    if from_right > canvas_width * LEFT_ZONE {
        Some(Direction::Left)
    } else if from_right < canvas_width * RIGHT_ZONE {
        Some(Direction::Right)
    } else {
        None
    }
}

/// Action for a `KeyboardEvent.code`.
pub fn key_action(code: &str) -> Option<InputAction> {
    match code {
        "ArrowLeft" => Some(InputAction::Navigate(Direction::Left)),
        "ArrowRight" => Some(InputAction::Navigate(Direction::Right)),
        "Escape" | "KeyQ" => Some(InputAction::Exit),
        _ => None,
    }
}

/// Direction for a wheel event's vertical delta.
pub fn wheel_direction(delta_y: f64, r2l: bool) -> Direction {
    let delta = if r2l { -delta_y } else { delta_y };
    if delta < 0.0 {
        Direction::Left
    } else {
        Direction::Right
    }
}
