//! PPTX layout reader implementation.
//!
//! Reads back the slide size and picture frames of a PPTX package, in
//! presentation order. Text and styling are ignored.

use crate::parts;
use pdf2pptx_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Geometry of a PPTX deck in EMUs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PptxLayout {
    pub slide_width: i64,
    pub slide_height: i64,
    pub slides: Vec<SlideFrames>,
}

/// Picture frames found on one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideFrames {
    /// Part name of the slide inside the package.
    pub path: String,
    pub pictures: Vec<PictureFrame>,
}

/// Offset and extent of a picture, in EMUs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureFrame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Reader for the layout of PPTX (Office Open XML) files.
pub struct PptxLayoutReader;

impl PptxLayoutReader {
    /// Create a new layout reader.
    pub fn new() -> Self {
        Self
    }

    /// Read the layout of a PPTX package.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<PptxLayout> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let presentation = self.read_file_from_archive(&mut archive, parts::PRESENTATION_PATH)?;
        let (slide_width, slide_height, slide_rel_ids) = parse_presentation(&presentation)?;

        let rels = self.read_file_from_archive(&mut archive, parts::PRESENTATION_RELS_PATH)?;
        let targets = parse_relationships(&rels)?;

        let mut slides = Vec::with_capacity(slide_rel_ids.len());
        for rel_id in &slide_rel_ids {
            let target = targets.get(rel_id).ok_or_else(|| {
                Error::XmlError(format!("Slide relationship '{}' has no target", rel_id))
            })?;
            let path = resolve_target(target);

            let content = self.read_file_from_archive(&mut archive, &path)?;
            let pictures = extract_pictures_from_xml(&content)?;
            log::debug!("{}: {} pictures", path, pictures.len());

            slides.push(SlideFrames { path, pictures });
        }

        Ok(PptxLayout {
            slide_width,
            slide_height,
            slides,
        })
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxLayoutReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Slide size and slide relationship IDs, in order, from `presentation.xml`.
fn parse_presentation(xml: &str) -> Result<(i64, i64, Vec<String>)> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut size = None;
    let mut rel_ids = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                match local_name(e.name().as_ref()) {
                    b"sldSz" => {
                        let (cx, cy) = extent_attrs(e);
                        size = Some((cx, cy));
                    }
                    b"sldId" => {
                        let rel_id = e
                            .attributes()
                            .flatten()
                            .find(|attr| attr.key.as_ref().ends_with(b":id"))
                            .map(|attr| String::from_utf8_lossy(&attr.value).to_string());
                        if let Some(rel_id) = rel_id {
                            rel_ids.push(rel_id);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing presentation: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    let (cx, cy) = size.ok_or_else(|| Error::XmlError("Missing slide size".to_string()))?;
    Ok((cx, cy, rel_ids))
}

/// Map of relationship ID to target.
fn parse_relationships(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut targets = HashMap::new();

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.name().as_ref() == b"Relationship" =>
            {
                let mut id = String::new();
                let mut target = String::new();

                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Id" => {
                            id = String::from_utf8_lossy(&attr.value).to_string();
                        }
                        b"Target" => {
                            target = String::from_utf8_lossy(&attr.value).to_string();
                        }
                        _ => {}
                    }
                }

                if !id.is_empty() {
                    targets.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing relationships: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(targets)
}

/// Picture frames from slide XML, in document order.
fn extract_pictures_from_xml(xml: &str) -> Result<Vec<PictureFrame>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut pictures = Vec::new();
    let mut current: Option<PictureFrame> = None;
    let mut in_xfrm = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"pic" => current = Some(PictureFrame::default()),
                b"xfrm" => in_xfrm = current.is_some(),
                _ => {}
            },
            Ok(Event::Empty(ref e)) if in_xfrm => {
                if let Some(ref mut frame) = current {
                    match local_name(e.name().as_ref()) {
                        b"off" => (frame.x, frame.y) = offset_attrs(e),
                        b"ext" => (frame.cx, frame.cy) = extent_attrs(e),
                        _ => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"pic" => {
                    if let Some(frame) = current.take() {
                        pictures.push(frame);
                    }
                }
                b"xfrm" => in_xfrm = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!("Error parsing slide: {}", e)));
            }
            _ => {}
        }
    }

    Ok(pictures)
}

fn offset_attrs(e: &BytesStart) -> (i64, i64) {
    (int_attr(e, b"x"), int_attr(e, b"y"))
}

fn extent_attrs(e: &BytesStart) -> (i64, i64) {
    (int_attr(e, b"cx"), int_attr(e, b"cy"))
}

/// Integer value of an unprefixed attribute, or 0.
fn int_attr(e: &BytesStart, key: &[u8]) -> i64 {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| String::from_utf8_lossy(&attr.value).parse().ok())
        .unwrap_or(0)
}

/// Package part name for a target relative to `ppt/`.
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("ppt/{}", target),
    }
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}
