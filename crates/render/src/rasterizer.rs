//! PDFium page rasterizer implementation.

use image::DynamicImage;
use pdf2pptx_core::{Error, Rasterizer, Result};
use pdfium_render::prelude::*;
use std::path::Path;

/// PDF user space units per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Renders PDF pages to images with PDFium.
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
    max_pages: Option<usize>,
}

impl PdfiumRasterizer {
    /// Bind to a PDFium library next to the executable, falling back to
    /// the system library.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| Error::Rasterize(format!("Failed to bind PDFium library: {}", e)))?;

        Ok(Self::with_pdfium(Pdfium::new(bindings)))
    }

    /// Use an already bound PDFium instance.
    pub fn with_pdfium(pdfium: Pdfium) -> Self {
        Self {
            pdfium,
            max_pages: None,
        }
    }

    /// Render at most `max_pages` pages of each document.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Render a single page at `dpi`.
    fn render_page(&self, page: &PdfPage, dpi: u16) -> Result<DynamicImage> {
        let (width, height) = pixel_size(page.width().value, page.height().value, dpi);

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(width)
                    .set_target_height(height)
                    .render_form_data(true)
                    .render_annotations(true),
            )
            .map_err(|e| Error::Rasterize(format!("Failed to render page: {}", e)))?;

        Ok(bitmap.as_image())
    }
}

impl Rasterizer for PdfiumRasterizer {
    type Page = DynamicImage;

    fn rasterize(&self, path: &Path, dpi: u16) -> Result<Vec<DynamicImage>> {
        if dpi == 0 {
            return Err(Error::InvalidDpi(dpi));
        }

        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::Rasterize(format!("Failed to load {}: {}", path.display(), e)))?;

        let pages = document.pages();
        let page_count = pages.len() as usize;
        let to_render = self.max_pages.map_or(page_count, |max| page_count.min(max));
        if to_render < page_count {
            log::warn!(
                "Rendering only the first {} of {} pages of {}",
                to_render,
                page_count,
                path.display()
            );
        }

        let mut images = Vec::with_capacity(to_render);
        for (idx, page) in pages.iter().take(to_render).enumerate() {
            let image = self
                .render_page(&page, dpi)
                .map_err(|e| Error::Rasterize(format!("Page {}: {}", idx + 1, e)))?;
            log::debug!(
                "Rendered page {}/{} at {} dpi: {}x{}",
                idx + 1,
                to_render,
                dpi,
                image.width(),
                image.height()
            );
            images.push(image);
        }

        Ok(images)
    }
}

/// Pixel size of a page of `width_pt` x `height_pt` points rendered at `dpi`.
///
/// Each side is truncated and kept at least one pixel.
fn pixel_size(width_pt: f32, height_pt: f32, dpi: u16) -> (i32, i32) {
    let side = |points: f32| ((points * f32::from(dpi) / POINTS_PER_INCH) as i32).max(1);
    (side(width_pt), side(height_pt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size_letter() {
        // US Letter is 612x792 points
        assert_eq!(pixel_size(612.0, 792.0, 72), (612, 792));
        assert_eq!(pixel_size(612.0, 792.0, 120), (1020, 1320));
        assert_eq!(pixel_size(612.0, 792.0, 300), (2550, 3300));
    }

    #[test]
    fn test_pixel_size_truncates() {
        // A4 is 595.28x841.89 points
        assert_eq!(pixel_size(595.28, 841.89, 72), (595, 841));
    }

    #[test]
    fn test_pixel_size_never_zero() {
        assert_eq!(pixel_size(0.1, 0.0, 72), (1, 1));
    }
}
