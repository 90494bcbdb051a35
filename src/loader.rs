//! Image loading and look-ahead preloading.
//!
//! Loading turns a resource identifier into a decoded `HtmlImageElement`.
//! Every decode in a batch is started before any of them is awaited, so a
//! batch takes as long as its slowest image. Preloading loads a window of
//! upcoming pages and drops the result; the browser's HTTP/image cache keeps
//! the bytes warm for the next navigation.

use crate::navigation::Direction;
use crate::pages::PageList;

/// Number of slots warmed ahead of the reader.
pub const PRELOAD_WINDOW: usize = 6;

/// Slots to warm from `pos` in `direction`, nearest first.
///
/// `Right` covers `[pos, pos + size)`, `Left` covers `[pos - size, pos)`
/// walked backwards. `Both` yields nothing; callers split it into its two
/// directions first.
pub fn preload_window(
    pages: &PageList,
    pos: usize,
    direction: Direction,
    size: usize,
) -> Vec<Option<String>> {
    match direction {
        Direction::Right => pages.range(pos, pos.saturating_add(size)).to_vec(),
        Direction::Left => pages
            .range(pos.saturating_sub(size), pos)
            .iter()
            .rev()
            .cloned()
            .collect(),
        Direction::Both => Vec::new(),
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{load, load_all, preload};

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlImageElement;

    use crate::error::{js_message, Result, ViewerError};
    use crate::navigation::Direction;

    /// Image whose decode has been requested but not awaited yet.
    struct PendingImage {
        src: String,
        image: HtmlImageElement,
        decode: JsFuture,
    }

    fn start(src: &str) -> Result<PendingImage> {
        let image =
            HtmlImageElement::new().map_err(|e| ViewerError::from_js("create image", &e))?;
        image.set_src(src);
        let decode = JsFuture::from(image.decode());
        Ok(PendingImage {
            src: src.to_string(),
            image,
            decode,
        })
    }

    async fn finish(pending: PendingImage) -> Result<HtmlImageElement> {
        let PendingImage { src, image, decode } = pending;
        match decode.await {
            Ok(_) => Ok(image),
            Err(e) => Err(ViewerError::ImageLoad {
                src,
                reason: js_message(&e),
            }),
        }
    }

    /// Load one identifier; `None` resolves immediately to `None`.
    pub async fn load(src: Option<&str>) -> Result<Option<HtmlImageElement>> {
        match src {
            Some(src) => finish(start(src)?).await.map(Some),
            None => Ok(None),
        }
    }

    /// Load every identifier concurrently, preserving order.
    pub async fn load_all(srcs: &[Option<String>]) -> Vec<Result<Option<HtmlImageElement>>> {
        let started: Vec<Option<Result<PendingImage>>> = srcs
            .iter()
            .map(|src| src.as_deref().map(start))
            .collect();

        let mut results = Vec::with_capacity(started.len());
        for slot in started {
            let result = match slot {
                None => Ok(None),
                Some(Ok(pending)) => finish(pending).await.map(Some),
                Some(Err(e)) => Err(e),
            };
            results.push(result);
        }
        results
    }

    /// Warm the cache for a window taken at `pos`; failures are only logged.
    pub async fn preload(window: Vec<Option<String>>, pos: usize, direction: Direction) {
        let mut warmed = 0usize;
        for result in load_all(&window).await {
            match result {
                Ok(Some(_)) => warmed += 1,
                Ok(None) => {}
                Err(e) => log::warn!("preload: {e}"),
            }
        }
        log::debug!("preloaded {warmed} page(s) {direction:?} of {pos}");
    }
}
