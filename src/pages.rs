//! Page list construction and resource addressing.
//!
//! The page list is the ordered sequence of image paths the cursor walks
//! over. It is built once per configuration: generated in reading order,
//! reversed for right-to-left documents so that index order matches screen
//! order, and optionally prefixed with a blank slot (pageshift) so the first
//! real page stands alone.

use serde::Serialize;

use crate::config::Configuration;
use crate::navigation::sane_position;

/// One or two resource identifiers to draw, left to right.
pub type PagePair = (Option<String>, Option<String>);

/// Path of one page image: `/img/<series>/<index>[?query=<text>]`.
pub fn resource_path(series_id: &str, index: usize, query_suffix: Option<&str>) -> String {
    format!("/img/{series_id}/{index}{}", query_suffix.unwrap_or_default())
}

/// Ordered, nullable resource identifiers in screen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageList {
    slots: Vec<Option<String>>,
}

/// Settings of the host pagination range control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagingControl {
    /// 1 for single pages, 2 for spreads.
    pub step: u32,
    /// Last valid (left-aligned) index.
    pub max: usize,
}

impl PagingControl {
    pub fn new(len: usize, spread: bool) -> Self {
        Self {
            step: 1 + u32::from(spread),
            max: sane_position(i64::MAX, len, spread),
        }
    }
}

/// Result of [`PageList::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltList {
    pub pages: PageList,
    /// Normalized start index into `pages`.
    pub start: usize,
    pub paging: PagingControl,
}

impl PageList {
    /// Build the list for a configuration and resolve its start position.
    pub fn build(config: &Configuration) -> BuiltList {
        let suffix = config.query_suffix();
        let mut slots: Vec<Option<String>> = (0..config.page_count)
            .map(|index| Some(resource_path(&config.series_id, index, suffix.as_deref())))
            .collect();

        let mut start = config.start_from;
        if config.r2l {
            slots.reverse();
            let last = i64::try_from(slots.len()).unwrap_or(i64::MAX) - 1;
            start = last - start;
        }

        if config.pageshift_effective() {
            slots.insert(0, None);
        }

        let pages = Self { slots };
        let start = sane_position(start, pages.len(), config.spread);
        let paging = PagingControl::new(pages.len(), config.spread);
        BuiltList {
            pages,
            start,
            paging,
        }
    }

    pub fn from_slots(slots: Vec<Option<String>>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Identifier at `index`; `None` for the pageshift blank or past the end.
    pub fn get(&self, index: usize) -> Option<String> {
        self.slots.get(index).cloned().flatten()
    }

    /// Index of the slot addressing the same page as `src`, ignoring any
    /// query suffix.
    pub fn position_of(&self, src: &str) -> Option<usize> {
        let base = strip_query(src);
        self.slots
            .iter()
            .position(|slot| slot.as_deref().map(strip_query) == Some(base))
    }

    /// Slots in `[start, end)`, clipped to the list.
    pub fn range(&self, start: usize, end: usize) -> &[Option<String>] {
        let end = end.min(self.slots.len());
        let start = start.min(end);
        self.slots.get(start..end).unwrap_or_default()
    }
}

fn strip_query(src: &str) -> &str {
    src.split_once('?').map_or(src, |(path, _)| path)
}
