//! Core of the PDF to slide deck converter: canvas sizing, centered
//! image placement, deck assembly, and the conversion pipeline.

pub mod assemble;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod types;

pub use assemble::build_slide_instructions;
pub use error::{Error, Result};
pub use geometry::{classify_fit, compute_canvas_size, compute_placement_rect, Fit};
pub use pipeline::{ConversionReport, Converter, DeckSerializer, Rasterizer, DEFAULT_DPI};
pub use types::{
    CanvasSize, DeckLayout, PageImage, PlacementRect, SlideDeck, SlideInstruction, SlideLayout,
};
