//! Viewer state and the navigation controller.
//!
//! [`ViewerState`] owns the configuration, the page list and the cursor. The
//! DOM layer asks it what to do (`navigate`, `path`, `apply_canvas`) and
//! applies the answer; nothing here touches the browser.

use serde::Serialize;

use super::position::Cursor;
use super::Direction;
use crate::config::{Configuration, Toggles};
use crate::layout::CanvasSize;
use crate::loader::{preload_window, PRELOAD_WINDOW};
use crate::pages::{PageList, PagePair, PagingControl};

/// A window of pages to warm after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreloadRequest {
    pub pos: usize,
    pub direction: Direction,
    pub size: usize,
}

/// Outcome of one navigation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Normalized list index (pagination widget value).
    pub position: usize,
    /// 1-based page number shown to the reader.
    pub indicator: usize,
    pub preloads: Vec<PreloadRequest>,
}

/// Serializable view of the state for JavaScript and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub position: usize,
    pub indicator: usize,
    pub spread: bool,
    pub paging: PagingControl,
    pub path: PagePair,
    pub pages: PageList,
}

/// Everything the viewer knows about the open document.
#[derive(Debug, Clone)]
pub struct ViewerState {
    config: Configuration,
    pages: PageList,
    start: usize,
    cursor: Cursor,
    /// Spread as currently laid out; the viewport may force it off.
    spread: bool,
    /// Whether the last canvas was wide enough for a spread.
    spread_allowed: bool,
    generation: u64,
}

impl ViewerState {
    pub fn new(config: Configuration) -> Self {
        let built = PageList::build(&config);
        let start = built.start;
        Self {
            spread: config.spread,
            spread_allowed: true,
            cursor: Cursor::new(i64::try_from(start).unwrap_or(0)),
            pages: built.pages,
            start,
            config,
            generation: 0,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    /// Normalized start position of the current list.
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn spread(&self) -> bool {
        self.spread
    }

    pub fn paging(&self) -> PagingControl {
        PagingControl::new(self.pages.len(), self.spread)
    }

    /// Direction of the first navigation: forward in reading order.
    pub fn initial_direction(&self) -> Direction {
        if self.config.r2l {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    pub fn current(&mut self) -> usize {
        self.cursor.current(&self.pages, self.spread)
    }

    pub fn path(&mut self) -> PagePair {
        self.cursor.path(&self.pages, self.spread)
    }

    /// Page number for the position display, mirrored for right-to-left.
    pub fn indicator(&self, pos: usize) -> usize {
        if self.config.r2l {
            self.pages.len().saturating_sub(pos)
        } else {
            pos + 1
        }
    }

    /// Move the cursor and report where it landed.
    ///
    /// An absolute `pos` wins over `direction`; unparseable input is logged
    /// and the cursor stays where it was.
    pub fn navigate(&mut self, direction: Direction, pos: Option<&str>) -> Navigation {
        match pos {
            Some(value) => {
                if let Err(e) = self.cursor.set_pos(value) {
                    log::error!("{e}");
                }
            }
            None => match direction {
                Direction::Right => self.cursor.right(self.spread),
                Direction::Left => self.cursor.left(self.spread),
                Direction::Both => {}
            },
        }

        let position = self.current();
        let preloads = direction
            .preload_directions()
            .iter()
            .map(|&direction| PreloadRequest {
                pos: position,
                direction,
                size: PRELOAD_WINDOW,
            })
            .collect();

        Navigation {
            position,
            indicator: self.indicator(position),
            preloads,
        }
    }

    /// Recompute spread eligibility for a new canvas size.
    ///
    /// Returns true when the effective spread changed.
    /// Slots a preload request should warm, nearest first.
    pub fn preload_window(&self, request: &PreloadRequest) -> Vec<Option<String>> {
        preload_window(&self.pages, request.pos, request.direction, request.size)
    }

    pub fn apply_canvas(&mut self, canvas: &CanvasSize, spread_toggle: bool) -> bool {
        self.spread_allowed = canvas.allows_spread();
        let spread = spread_toggle && self.spread_allowed;
        if spread_toggle && !spread {
            log::debug!(
                "spread off: aspect {:.2} below threshold",
                canvas.aspect_ratio()
            );
        }
        let changed = spread != self.spread;
        self.spread = spread;
        changed
    }

    /// Rebuild the list after the reader changed a toggle, keeping the page
    /// on screen when it still exists.
    pub fn reconfigure(&mut self, toggles: Toggles) {
        let (first, second) = self.path();
        let visible = first.or(second);

        let config = self.config.with_toggles(Toggles {
            pageshift: toggles.pageshift_enabled() && toggles.pageshift,
            ..toggles
        });
        let built = PageList::build(&config);
        let target = visible
            .as_deref()
            .and_then(|src| built.pages.position_of(src))
            .unwrap_or(built.start);

        log::info!(
            "page list rebuilt: {} slot(s), spread={}, pageshift={}",
            built.pages.len(),
            config.spread,
            config.pageshift_effective()
        );

        self.spread = config.spread && self.spread_allowed;
        self.start = built.start;
        self.pages = built.pages;
        self.config = config;
        self.cursor.set_index(i64::try_from(target).unwrap_or(0));
    }

    pub fn snapshot(&mut self) -> Snapshot {
        let position = self.current();
        Snapshot {
            position,
            indicator: self.indicator(position),
            spread: self.spread,
            paging: self.paging(),
            path: self.path(),
            pages: self.pages.clone(),
        }
    }

    /// Start a render; later renders supersede it.
    pub fn begin_render(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current_render(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
