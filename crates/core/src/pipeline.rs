//! Document conversion: rasterize, assemble, serialize, persist.
//!
//! Rasterization and deck serialization are supplied by other crates
//! through the [`Rasterizer`] and [`DeckSerializer`] traits.

use crate::assemble::build_slide_instructions;
use crate::error::Result;
use crate::types::{CanvasSize, DeckLayout, PageImage, SlideDeck};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Rendering resolution used when none is given.
pub const DEFAULT_DPI: u16 = 120;

/// Turns a document into page images, in page order.
pub trait Rasterizer {
    /// The rendered page type.
    type Page: PageImage;

    /// Render every page of the document at `path` at `dpi`.
    fn rasterize(&self, path: &Path, dpi: u16) -> Result<Vec<Self::Page>>;
}

/// Writes an assembled deck in some presentation file format.
pub trait DeckSerializer<P> {
    /// Serialize `deck` into `out`.
    fn serialize(&self, deck: &SlideDeck<P>, out: &mut dyn Write) -> Result<()>;

    /// File extension (without the dot) of the produced format.
    fn extension(&self) -> &'static str;
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pages: usize,
    pub canvas: CanvasSize,
}

/// Converts documents with a rasterizer and a deck serializer.
pub struct Converter<R, S> {
    rasterizer: R,
    serializer: S,
    dpi: u16,
}

impl<R, S> Converter<R, S>
where
    R: Rasterizer,
    S: DeckSerializer<R::Page>,
{
    /// Create a converter rendering at [`DEFAULT_DPI`].
    pub fn new(rasterizer: R, serializer: S) -> Self {
        Self {
            rasterizer,
            serializer,
            dpi: DEFAULT_DPI,
        }
    }

    /// Set the rendering resolution.
    pub fn with_dpi(mut self, dpi: u16) -> Self {
        self.dpi = dpi;
        self
    }

    /// The rendering resolution in use.
    pub fn dpi(&self) -> u16 {
        self.dpi
    }

    /// Output path for `input`: same stem with the serializer's extension,
    /// inside `output_dir` if given, otherwise next to the input.
    pub fn output_path_for(&self, input: &Path, output_dir: Option<&Path>) -> PathBuf {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let filename = format!("{}.{}", stem, self.serializer.extension());

        match output_dir {
            Some(dir) => dir.join(filename),
            None => match input.parent() {
                Some(parent) => parent.join(filename),
                None => PathBuf::from(filename),
            },
        }
    }

    /// Rasterize and assemble `input`.
    pub fn build(&self, input: &Path) -> Result<SlideDeck<R::Page>> {
        let pages = self.rasterizer.rasterize(input, self.dpi)?;
        log::debug!("Rasterized {} pages from {}", pages.len(), input.display());
        build_slide_instructions(pages)
    }

    /// Compute the deck layout for `input` without writing anything.
    pub fn plan(&self, input: &Path) -> Result<DeckLayout> {
        Ok(self.build(input)?.layout())
    }

    /// Convert `input` and write the deck to `output`.
    ///
    /// Either the whole deck is written or `output` is left untouched.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionReport> {
        let deck = self.build(input)?;

        let mut buffer = Vec::new();
        self.serializer.serialize(&deck, &mut buffer)?;
        log::debug!("Serialized {} slides ({} bytes)", deck.len(), buffer.len());

        persist_atomically(output, &buffer)?;

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            pages: deck.len(),
            canvas: deck.canvas,
        })
    }
}

/// Write `bytes` to a sibling temporary file, then rename it over `path`.
fn persist_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let partial = partial_path(path);

    let written = fs::File::create(&partial).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    let result = written.and_then(|()| fs::rename(&partial, path));

    if let Err(e) = result {
        if partial.exists() {
            if let Err(cleanup) = fs::remove_file(&partial) {
                log::warn!("Failed to remove {}: {}", partial.display(), cleanup);
            }
        }
        return Err(e.into());
    }

    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
