//! Compositor: draw the current page or pair onto a backend.

use crate::error::Result;
use crate::layout::{compose, Composition, Slot};
use crate::render::backend::{ImageSize, RenderBackend};

/// Composite up to two decoded images (left, right) onto `backend`.
///
/// Returns the placement that was drawn; [`Composition::Empty`] when there
/// was nothing to draw.
pub fn draw_pair<B: RenderBackend>(
    backend: &mut B,
    first: Option<&B::Image>,
    second: Option<&B::Image>,
) -> Result<Composition> {
    let composition = compose(
        backend.size(),
        first.map(|image| image.size()),
        second.map(|image| image.size()),
    );

    match composition {
        Composition::Pair {
            first: left,
            second: right,
        } => {
            if let (Some(a), Some(b)) = (first, second) {
                backend.draw_image(a, left)?;
                backend.draw_image(b, right)?;
            }
        }
        Composition::Single { slot, rect } => {
            let image = match slot {
                Slot::First => first,
                Slot::Second => second,
            };
            if let Some(image) = image {
                backend.draw_image(image, rect)?;
            }
        }
        Composition::Empty => log::info!("No images are found."),
    }
    Ok(composition)
}

/// Collapse a load result into a drawable slot.
///
/// A failed load is drawn like an absent page; the failure is logged.
pub fn usable<I>(loaded: Result<Option<I>>) -> Option<I> {
    match loaded {
        Ok(image) => image,
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}
