//! PPTX (Office Open XML) backend for the slide deck converter.
//!
//! Writes assembled decks as .pptx packages (ZIP archives of XML parts
//! plus embedded page images) and reads their layout back.

mod parts;
pub mod reader;
pub mod writer;

pub use reader::{PictureFrame, PptxLayout, PptxLayoutReader, SlideFrames};
pub use writer::{EncodablePage, ImageEncoding, PptxWriter, EMU_PER_POINT};
