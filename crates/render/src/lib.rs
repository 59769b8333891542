//! PDF rasterizer backend for the slide deck converter.
//!
//! Renders each page of a PDF through PDFium into an in-memory image.

pub mod rasterizer;

pub use rasterizer::PdfiumRasterizer;
