//! Deck assembly: one canvas for the whole document, one placement per page.

use crate::error::Result;
use crate::geometry::{compute_canvas_size, compute_placement_rect};
use crate::types::{PageImage, SlideDeck, SlideInstruction};

/// Build the slide instructions for a document's pages.
///
/// The canvas is derived from every page before any placement is computed,
/// and slides come out in the same order as `images`.
pub fn build_slide_instructions<P: PageImage>(images: Vec<P>) -> Result<SlideDeck<P>> {
    let canvas = compute_canvas_size(&images)?;
    log::debug!(
        "Canvas {}x{} for {} pages",
        canvas.width,
        canvas.height,
        images.len()
    );

    let mut slides = Vec::with_capacity(images.len());
    for (idx, image) in images.into_iter().enumerate() {
        let rect =
            compute_placement_rect(canvas.width, canvas.height, image.width(), image.height())?;
        log::debug!(
            "Page {} ({}x{}) placed at ({}, {}) size {}x{}",
            idx + 1,
            image.width(),
            image.height(),
            rect.left,
            rect.top,
            rect.width,
            rect.height
        );

        slides.push(SlideInstruction {
            page_number: idx + 1,
            image,
            rect,
        });
    }

    Ok(SlideDeck { canvas, slides })
}
