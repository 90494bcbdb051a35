//! Position resolution and the page cursor.
//!
//! Positions are list indices. While spreading, the pair `(pos, pos + 1)` is
//! shown and `pos` must be even ("left" member of the pair). Raw positions
//! are signed: relative moves may step past either end and are folded back
//! by [`sane_position`] on the next read.

use crate::config::parse_integer;
use crate::error::{Result, ViewerError};
use crate::pages::{PageList, PagePair};

/// Map any raw position to a valid, layout-consistent list index.
///
/// The result is in `[0, len - 1]` (0 for an empty list) and even when
/// `spread` is set. Overflow clamps to the last index and is then aligned
/// like any other position, so `sane_position(sane_position(p)) ==
/// sane_position(p)`.
pub fn sane_position(pos: i64, len: usize, spread: bool) -> usize {
    let Some(last) = len.checked_sub(1) else {
        return 0;
    };
    let clamped = match usize::try_from(pos) {
        Ok(p) => p.min(last),
        Err(_) => 0,
    };
    let misaligned = usize::from(spread) * (clamped % 2);
    clamped - misaligned
}

/// Cursor over the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: i64,
}

impl Cursor {
    pub fn new(start: i64) -> Self {
        Self { pos: start }
    }

    /// Raw stored position, possibly not yet normalized.
    pub fn raw(&self) -> i64 {
        self.pos
    }

    fn step(spread: bool) -> i64 {
        1 + i64::from(spread)
    }

    pub fn right(&mut self, spread: bool) {
        self.pos = self.pos.saturating_add(Self::step(spread));
    }

    pub fn left(&mut self, spread: bool) {
        self.pos = self.pos.saturating_sub(Self::step(spread));
    }

    /// Jump to an absolute position given as text (pagination widget, JS).
    ///
    /// Non-numeric input is rejected and the position is left untouched.
    pub fn set_pos(&mut self, value: &str) -> Result<()> {
        let pos = parse_integer(value).ok_or_else(|| ViewerError::InvalidPosition(value.into()))?;
        self.pos = pos;
        Ok(())
    }

    pub fn set_index(&mut self, pos: i64) {
        self.pos = pos;
    }

    /// Normalized position; the stored position is updated to it.
    pub fn current(&mut self, pages: &PageList, spread: bool) -> usize {
        let resolved = sane_position(self.pos, pages.len(), spread);
        self.pos = i64::try_from(resolved).unwrap_or(i64::MAX);
        resolved
    }

    /// Resource identifiers to show: the pair at the normalized position
    /// when spreading, else the single page and `None`.
    pub fn path(&mut self, pages: &PageList, spread: bool) -> PagePair {
        let pos = self.current(pages, spread);
        let first = pages.get(pos);
        let second = if spread { pages.get(pos + 1) } else { None };
        (first, second)
    }
}
