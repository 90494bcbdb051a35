//! Page navigation: position resolution, the cursor and the controller
//! reacting to navigation requests.

mod controller;
mod position;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

pub use controller::{Navigation, PreloadRequest, Snapshot, ViewerState};
pub use position::{sane_position, Cursor};

/// Screen direction of a navigation request.
///
/// Directions are visual: in right-to-left documents "left" is forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    /// No relative move; preload on both sides.
    Both,
}

impl Direction {
    /// Directions to preload after a move in this direction.
    pub fn preload_directions(self) -> &'static [Direction] {
        match self {
            Self::Left => &[Self::Left],
            Self::Right => &[Self::Right],
            Self::Both => &[Self::Right, Self::Left],
        }
    }
}

impl FromStr for Direction {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "both" => Ok(Self::Both),
            other => Err(ViewerError::Other(format!("unknown direction {other:?}"))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        };
        f.write_str(name)
    }
}
