//! Canvas sizing and centered, aspect-preserving image placement.
//!
//! All ratio comparisons are done by cross-multiplying in 64-bit integers,
//! and scaled sides are exact integer floors, so the results never depend
//! on floating-point rounding.

use crate::error::{Error, Result};
use crate::types::{CanvasSize, PageImage, PlacementRect};

/// Which canvas side an image is scaled to meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// The canvas is relatively wider than the image: the image fills the
    /// canvas height and is centered horizontally.
    HeightBound,
    /// The canvas is relatively taller than (or as tall as) the image: the
    /// image fills the canvas width and is centered vertically.
    WidthBound,
}

/// Compute the canvas that bounds every page: the widest width and the
/// tallest height, taken independently.
pub fn compute_canvas_size<P: PageImage>(images: &[P]) -> Result<CanvasSize> {
    if images.is_empty() {
        return Err(Error::EmptyInput);
    }

    let width = images.iter().map(PageImage::width).max().unwrap_or(0);
    let height = images.iter().map(PageImage::height).max().unwrap_or(0);

    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }

    Ok(CanvasSize::new(width, height))
}

/// Decide which side of the canvas an image of the given size is bound by.
///
/// Equal aspect ratios resolve to [`Fit::WidthBound`].
pub fn classify_fit(canvas: CanvasSize, image_width: u32, image_height: u32) -> Fit {
    // canvas.width / canvas.height > image_width / image_height
    let canvas_cross = u64::from(canvas.width) * u64::from(image_height);
    let image_cross = u64::from(image_width) * u64::from(canvas.height);

    if canvas_cross > image_cross {
        Fit::HeightBound
    } else {
        Fit::WidthBound
    }
}

/// Compute where an image goes on a canvas: scaled to touch the canvas on
/// one axis, aspect ratio preserved, centered on the other axis.
///
/// The scaled side is truncated to a whole unit first and the centering
/// offset is derived from that truncated side.
pub fn compute_placement_rect(
    canvas_width: u32,
    canvas_height: u32,
    image_width: u32,
    image_height: u32,
) -> Result<PlacementRect> {
    if canvas_width == 0 || canvas_height == 0 {
        return Err(Error::InvalidDimension {
            width: canvas_width,
            height: canvas_height,
        });
    }
    if image_width == 0 || image_height == 0 {
        return Err(Error::InvalidDimension {
            width: image_width,
            height: image_height,
        });
    }

    let canvas = CanvasSize::new(canvas_width, canvas_height);

    let rect = match classify_fit(canvas, image_width, image_height) {
        Fit::HeightBound => {
            let height = canvas_height;
            let width = scale_floor(height, image_width, image_height);
            PlacementRect {
                left: f64::from(canvas_width - width) / 2.0,
                top: 0.0,
                width,
                height,
            }
        }
        Fit::WidthBound => {
            let width = canvas_width;
            let height = scale_floor(width, image_height, image_width);
            PlacementRect {
                left: 0.0,
                top: f64::from(canvas_height - height) / 2.0,
                width,
                height,
            }
        }
    };

    Ok(rect)
}

/// `floor(side * numerator / denominator)`.
///
/// Callers only pass ratios that keep the result at or below the canvas
/// side it is measured against, so it fits back into a `u32`.
fn scale_floor(side: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(side) * u64::from(numerator) / u64::from(denominator);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page(u32, u32);

    impl PageImage for Page {
        fn width(&self) -> u32 {
            self.0
        }

        fn height(&self) -> u32 {
            self.1
        }
    }

    fn rect(left: f64, top: f64, width: u32, height: u32) -> PlacementRect {
        PlacementRect {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn test_canvas_size_takes_max_per_axis() {
        let pages = [Page(100, 200), Page(300, 50), Page(150, 150)];
        assert_eq!(
            compute_canvas_size(&pages).unwrap(),
            CanvasSize::new(300, 200)
        );
    }

    #[test]
    fn test_canvas_size_ignores_order() {
        let forward = [Page(100, 200), Page(300, 50), Page(150, 150)];
        let reversed = [Page(150, 150), Page(300, 50), Page(100, 200)];
        assert_eq!(
            compute_canvas_size(&forward).unwrap(),
            compute_canvas_size(&reversed).unwrap()
        );
    }

    #[test]
    fn test_canvas_size_single_page() {
        assert_eq!(
            compute_canvas_size(&[Page(640, 480)]).unwrap(),
            CanvasSize::new(640, 480)
        );
    }

    #[test]
    fn test_canvas_size_empty() {
        let pages: [Page; 0] = [];
        assert!(matches!(compute_canvas_size(&pages), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_canvas_size_zero_axis() {
        let pages = [Page(0, 10), Page(0, 20)];
        assert!(matches!(
            compute_canvas_size(&pages),
            Err(Error::InvalidDimension { width: 0, height: 20 })
        ));
    }

    #[test]
    fn test_placement_equal_ratios() {
        assert_eq!(
            compute_placement_rect(1000, 500, 800, 400).unwrap(),
            rect(0.0, 0.0, 1000, 500)
        );
    }

    #[test]
    fn test_placement_height_bound() {
        // 0.5 image on a 2.0 canvas
        assert_eq!(
            compute_placement_rect(1000, 500, 400, 800).unwrap(),
            rect(375.0, 0.0, 250, 500)
        );
    }

    #[test]
    fn test_placement_width_bound() {
        // 2.0 image on a 0.4 canvas
        assert_eq!(
            compute_placement_rect(400, 1000, 800, 400).unwrap(),
            rect(0.0, 400.0, 400, 200)
        );
    }

    #[test]
    fn test_placement_truncates_then_centers() {
        // 100 * 3 / 7 = 42.857... -> 42, leaving 58 to split
        let placed = compute_placement_rect(100, 100, 3, 7).unwrap();
        assert_eq!(placed, rect(29.0, 0.0, 42, 100));

        // 100 * 2 / 3 = 66.66... -> 66, leaving 33 to split
        let placed = compute_placement_rect(100, 99, 3, 2).unwrap();
        assert_eq!(placed, rect(0.0, 16.5, 100, 66));
    }

    #[test]
    fn test_placement_rejects_zero() {
        assert!(matches!(
            compute_placement_rect(0, 10, 10, 10),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            compute_placement_rect(10, 0, 10, 10),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            compute_placement_rect(10, 10, 0, 10),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            compute_placement_rect(10, 10, 10, 0),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_placement_is_deterministic() {
        let first = compute_placement_rect(1366, 768, 1241, 1754).unwrap();
        let second = compute_placement_rect(1366, 768, 1241, 1754).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_fit_tie_is_width_bound() {
        let canvas = CanvasSize::new(1000, 500);
        assert_eq!(classify_fit(canvas, 800, 400), Fit::WidthBound);
        assert_eq!(classify_fit(canvas, 400, 800), Fit::HeightBound);
        assert_eq!(classify_fit(canvas, 3000, 1000), Fit::WidthBound);
    }

    #[test]
    fn test_placement_properties_over_grid() {
        let sides = [1u32, 2, 3, 7, 10, 99, 100, 333, 1000, 4961];

        for &cw in &sides {
            for &ch in &sides {
                for &iw in &sides {
                    for &ih in &sides {
                        let canvas = CanvasSize::new(cw, ch);
                        let placed = compute_placement_rect(cw, ch, iw, ih).unwrap();

                        let case = format!("{cw}x{ch} {iw}x{ih}: {placed:?}");

                        assert!(placed.fits_within(canvas), "{case}");

                        // Full bleed on at least one axis
                        let full_width = placed.is_full_bleed_width(canvas);
                        let full_height = placed.is_full_bleed_height(canvas);
                        assert!(full_width || full_height, "{case}");

                        // Both axes only when the ratios match exactly
                        let same_ratio =
                            u64::from(cw) * u64::from(ih) == u64::from(iw) * u64::from(ch);
                        assert_eq!(full_width && full_height, same_ratio, "{case}");

                        // Centered on both axes
                        assert_eq!(placed.left * 2.0 + f64::from(placed.width), f64::from(cw));
                        assert_eq!(placed.top * 2.0 + f64::from(placed.height), f64::from(ch));

                        // Truncation loses less than one unit on the scaled side
                        match classify_fit(canvas, iw, ih) {
                            Fit::HeightBound => {
                                let ideal = f64::from(ch) * f64::from(iw) / f64::from(ih);
                                assert!(ideal - f64::from(placed.width) < 1.0);
                            }
                            Fit::WidthBound => {
                                let ideal = f64::from(cw) * f64::from(ih) / f64::from(iw);
                                assert!(ideal - f64::from(placed.height) < 1.0);
                            }
                        }
                    }
                }
            }
        }
    }
}
