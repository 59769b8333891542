//! Domain types for page images, canvas geometry, and slide instructions.

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// A rendered page whose pixel dimensions can be read.
///
/// Width and height are expected to be positive; the geometry functions
/// reject zero-sized pages with [`crate::Error::InvalidDimension`].
pub trait PageImage {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;
}

impl PageImage for DynamicImage {
    fn width(&self) -> u32 {
        DynamicImage::width(self)
    }

    fn height(&self) -> u32 {
        DynamicImage::height(self)
    }
}

/// Size of the canvas shared by every slide in a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Create a canvas size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Where an image is drawn on the canvas.
///
/// `width` and `height` are whole canvas units. `left` and `top` are half
/// the leftover space on their axis, so they may land on a half unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRect {
    pub left: f64,
    pub top: f64,
    pub width: u32,
    pub height: u32,
}

impl PlacementRect {
    /// Right edge of the rectangle.
    pub fn right(&self) -> f64 {
        self.left + f64::from(self.width)
    }

    /// Bottom edge of the rectangle.
    pub fn bottom(&self) -> f64 {
        self.top + f64::from(self.height)
    }

    /// Whether the rectangle lies entirely inside the canvas.
    pub fn fits_within(&self, canvas: CanvasSize) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right() <= f64::from(canvas.width)
            && self.bottom() <= f64::from(canvas.height)
    }

    /// Whether the rectangle spans the full canvas width.
    pub fn is_full_bleed_width(&self, canvas: CanvasSize) -> bool {
        self.width == canvas.width
    }

    /// Whether the rectangle spans the full canvas height.
    pub fn is_full_bleed_height(&self, canvas: CanvasSize) -> bool {
        self.height == canvas.height
    }
}

/// One page image paired with its placement, destined for one slide.
#[derive(Debug, Clone)]
pub struct SlideInstruction<P> {
    /// 1-based page number in the source document.
    pub page_number: usize,

    /// The rendered page.
    pub image: P,

    /// Where the page goes on the canvas.
    pub rect: PlacementRect,
}

/// The complete output of deck assembly: one canvas and slides in page order.
#[derive(Debug, Clone)]
pub struct SlideDeck<P> {
    pub canvas: CanvasSize,
    pub slides: Vec<SlideInstruction<P>>,
}

impl<P> SlideDeck<P> {
    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Iterate over the slides in page order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlideInstruction<P>> {
        self.slides.iter()
    }
}

impl<P: PageImage> SlideDeck<P> {
    /// Describe the deck geometry without the pixel data.
    pub fn layout(&self) -> DeckLayout {
        DeckLayout {
            canvas: self.canvas,
            slides: self
                .slides
                .iter()
                .map(|slide| SlideLayout {
                    page_number: slide.page_number,
                    image_width: slide.image.width(),
                    image_height: slide.image.height(),
                    rect: slide.rect,
                })
                .collect(),
        }
    }
}

impl<'a, P> IntoIterator for &'a SlideDeck<P> {
    type Item = &'a SlideInstruction<P>;
    type IntoIter = std::slice::Iter<'a, SlideInstruction<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

/// Geometry of a deck, suitable for printing as a conversion plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckLayout {
    pub canvas: CanvasSize,
    pub slides: Vec<SlideLayout>,
}

/// Geometry of a single slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideLayout {
    pub page_number: usize,
    pub image_width: u32,
    pub image_height: u32,
    pub rect: PlacementRect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_bounds() {
        let canvas = CanvasSize::new(1000, 500);
        let rect = PlacementRect {
            left: 375.0,
            top: 0.0,
            width: 250,
            height: 500,
        };

        assert_eq!(rect.right(), 625.0);
        assert_eq!(rect.bottom(), 500.0);
        assert!(rect.fits_within(canvas));
        assert!(rect.is_full_bleed_height(canvas));
        assert!(!rect.is_full_bleed_width(canvas));
    }

    #[test]
    fn test_rect_outside_canvas() {
        let canvas = CanvasSize::new(100, 100);
        let rect = PlacementRect {
            left: 0.5,
            top: 0.0,
            width: 100,
            height: 100,
        };
        assert!(!rect.fits_within(canvas));
    }

    #[test]
    fn test_dynamic_image_dimensions() {
        let image = DynamicImage::new_rgb8(12, 34);
        assert_eq!(PageImage::width(&image), 12);
        assert_eq!(PageImage::height(&image), 34);
    }
}
