//! Error types for PDF to slide deck conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a document into a slide deck.
#[derive(Error, Debug)]
pub enum Error {
    /// No page images were supplied, so there is nothing to derive a canvas from.
    #[error("No page images to build a deck from")]
    EmptyInput,

    /// A canvas or image reported a zero width or height.
    #[error("Invalid dimensions {width}x{height}: both sides must be positive")]
    InvalidDimension { width: u32, height: u32 },

    /// The rendering resolution must be positive.
    #[error("Invalid rendering resolution: {0} dpi")]
    InvalidDpi(u16),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The rasterizer could not turn the document into page images.
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// A page image could not be encoded for embedding.
    #[error("Image encoding error: {0}")]
    Encode(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),

    /// The deck could not be serialized.
    #[error("Deck serialization error: {0}")]
    Serialize(String),
}
