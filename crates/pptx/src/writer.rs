//! PPTX deck writer implementation.

use crate::parts::{self, content_types, rel_types};
use image::{DynamicImage, ImageFormat};
use pdf2pptx_core::{CanvasSize, DeckSerializer, Error, PageImage, PlacementRect, Result, SlideDeck};
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Seek, Write};
use std::str::FromStr;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// English Metric Units per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// Smallest slide side PowerPoint accepts (1 inch).
pub const MIN_SLIDE_EMU: i64 = 914_400;

/// Largest slide side PowerPoint accepts (56 inches).
pub const MAX_SLIDE_EMU: i64 = 51_206_400;

/// First slide ID PowerPoint allows in `p:sldIdLst`.
const FIRST_SLIDE_ID: usize = 256;

/// Relationship IDs in `presentation.xml.rels` before the slides.
const SLIDE_MASTER_REL_ID: &str = "rId1";
const THEME_REL_ID: &str = "rId2";
const FIRST_SLIDE_REL: usize = 3;

/// Raster encoding used for embedded page images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageEncoding {
    /// JPEG; transparency is dropped.
    #[default]
    Jpeg,
    /// Lossless PNG.
    Png,
}

impl ImageEncoding {
    /// File extension used inside the package.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    /// MIME type registered in `[Content_Types].xml`.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl FromStr for ImageEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            other => Err(Error::Encode(format!("Unsupported image encoding: {}", other))),
        }
    }
}

/// A page that can be encoded into bytes for embedding.
pub trait EncodablePage {
    /// Encode the page in `encoding`.
    fn encode(&self, encoding: ImageEncoding) -> Result<Vec<u8>>;
}

impl EncodablePage for DynamicImage {
    fn encode(&self, encoding: ImageEncoding) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut cursor = Cursor::new(&mut bytes);

        let written = match (encoding, self) {
            (ImageEncoding::Jpeg, DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_)) => {
                self.write_to(&mut cursor, ImageFormat::Jpeg)
            }
            // The JPEG encoder only takes 8-bit channels without alpha
            (ImageEncoding::Jpeg, _) => {
                DynamicImage::ImageRgb8(self.to_rgb8()).write_to(&mut cursor, ImageFormat::Jpeg)
            }
            (ImageEncoding::Png, _) => self.write_to(&mut cursor, ImageFormat::Png),
        };
        written.map_err(|e| Error::Encode(e.to_string()))?;

        Ok(bytes)
    }
}

/// Writes slide decks as PPTX packages.
#[derive(Debug, Clone)]
pub struct PptxWriter {
    encoding: ImageEncoding,
    emu_per_unit: i64,
}

impl PptxWriter {
    /// Create a writer that embeds JPEG images and maps one canvas unit
    /// to one point.
    pub fn new() -> Self {
        Self {
            encoding: ImageEncoding::default(),
            emu_per_unit: EMU_PER_POINT,
        }
    }

    /// Set the embedded image encoding.
    pub fn with_encoding(mut self, encoding: ImageEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set how many EMUs one canvas unit spans (at least 1).
    pub fn with_emu_per_unit(mut self, emu_per_unit: i64) -> Self {
        self.emu_per_unit = emu_per_unit.max(1);
        self
    }

    /// Write `deck` as a PPTX package into a seekable writer.
    pub fn write_to<P, W>(&self, deck: &SlideDeck<P>, writer: W) -> Result<W>
    where
        P: PageImage + EncodablePage,
        W: Write + Seek,
    {
        let (slide_cx, slide_cy) = self.slide_size_emu(deck.canvas);
        check_slide_size(slide_cx, slide_cy);

        let mut zip = ZipWriter::new(writer);
        let xml_options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let media_options = FileOptions::default().compression_method(CompressionMethod::Stored);

        let slide_count = deck.len();
        let xml_parts: [(&str, String); 11] = [
            ("[Content_Types].xml", self.content_types_xml(slide_count)?),
            ("_rels/.rels", package_rels_xml()?),
            (parts::CORE_PROPERTIES_PATH, parts::CORE_PROPERTIES_XML.to_string()),
            (parts::APP_PROPERTIES_PATH, app_properties_xml(slide_count)?),
            (parts::PRESENTATION_PATH, presentation_xml(slide_count, slide_cx, slide_cy)?),
            (parts::PRESENTATION_RELS_PATH, presentation_rels_xml(slide_count)?),
            (parts::SLIDE_MASTER_PATH, parts::SLIDE_MASTER_XML.to_string()),
            (parts::SLIDE_MASTER_RELS_PATH, parts::SLIDE_MASTER_RELS_XML.to_string()),
            (parts::SLIDE_LAYOUT_PATH, parts::SLIDE_LAYOUT_XML.to_string()),
            (parts::SLIDE_LAYOUT_RELS_PATH, parts::SLIDE_LAYOUT_RELS_XML.to_string()),
            (parts::THEME_PATH, parts::THEME_XML.to_string()),
        ];
        for (path, xml) in &xml_parts {
            write_entry(&mut zip, path, xml.as_bytes(), xml_options)?;
        }

        for (idx, slide) in deck.iter().enumerate() {
            let number = idx + 1;
            let media_name = format!("image{}.{}", number, self.encoding.extension());

            let image_bytes = slide
                .image
                .encode(self.encoding)
                .map_err(|e| Error::Encode(format!("Page {}: {}", slide.page_number, e)))?;
            log::debug!(
                "Slide {}: embedding {} bytes as {}",
                number,
                image_bytes.len(),
                media_name
            );

            write_entry(
                &mut zip,
                &format!("ppt/media/{}", media_name),
                &image_bytes,
                media_options,
            )?;
            write_entry(
                &mut zip,
                &format!("ppt/slides/slide{}.xml", number),
                self.slide_xml(slide.page_number, &slide.rect)?.as_bytes(),
                xml_options,
            )?;
            write_entry(
                &mut zip,
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                slide_rels_xml(&media_name)?.as_bytes(),
                xml_options,
            )?;
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    /// Slide size in EMUs for a canvas.
    pub fn slide_size_emu(&self, canvas: CanvasSize) -> (i64, i64) {
        (
            i64::from(canvas.width) * self.emu_per_unit,
            i64::from(canvas.height) * self.emu_per_unit,
        )
    }

    /// Picture frame `(x, y, cx, cy)` in EMUs for a placement rectangle.
    pub fn rect_emu(&self, rect: &PlacementRect) -> (i64, i64, i64, i64) {
        let scale = self.emu_per_unit as f64;
        (
            (rect.left * scale).round() as i64,
            (rect.top * scale).round() as i64,
            i64::from(rect.width) * self.emu_per_unit,
            i64::from(rect.height) * self.emu_per_unit,
        )
    }

    fn content_types_xml(&self, slide_count: usize) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str(parts::XML_DECLARATION);
        write!(xml, r#"<Types xmlns="{}">"#, parts::NS_CONTENT_TYPES).map_err(fmt_err)?;
        write!(
            xml,
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            content_types::RELATIONSHIPS
        )
        .map_err(fmt_err)?;
        write!(
            xml,
            r#"<Default Extension="xml" ContentType="{}"/>"#,
            content_types::XML
        )
        .map_err(fmt_err)?;
        write!(
            xml,
            r#"<Default Extension="{}" ContentType="{}"/>"#,
            self.encoding.extension(),
            self.encoding.content_type()
        )
        .map_err(fmt_err)?;

        let fixed = [
            (parts::PRESENTATION_PATH, content_types::PRESENTATION),
            (parts::SLIDE_MASTER_PATH, content_types::SLIDE_MASTER),
            (parts::SLIDE_LAYOUT_PATH, content_types::SLIDE_LAYOUT),
            (parts::THEME_PATH, content_types::THEME),
            (parts::CORE_PROPERTIES_PATH, content_types::CORE_PROPERTIES),
            (parts::APP_PROPERTIES_PATH, content_types::EXTENDED_PROPERTIES),
        ];
        for (path, content_type) in fixed {
            write!(
                xml,
                r#"<Override PartName="/{}" ContentType="{}"/>"#,
                path, content_type
            )
            .map_err(fmt_err)?;
        }
        for number in 1..=slide_count {
            write!(
                xml,
                r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="{}"/>"#,
                number,
                content_types::SLIDE
            )
            .map_err(fmt_err)?;
        }

        xml.push_str("</Types>");
        Ok(xml)
    }

    fn slide_xml(&self, page_number: usize, rect: &PlacementRect) -> Result<String> {
        let (x, y, cx, cy) = self.rect_emu(rect);

        let mut xml = String::with_capacity(1024);
        xml.push_str(parts::XML_DECLARATION);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            parts::NS_A,
            parts::NS_R,
            parts::NS_P
        )
        .map_err(fmt_err)?;
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(parts::SP_TREE_HEADER);

        xml.push_str("<p:pic>");
        xml.push_str("<p:nvPicPr>");
        write!(
            xml,
            r#"<p:cNvPr id="2" name="Page {0}" descr="Page {0}"/>"#,
            page_number
        )
        .map_err(fmt_err)?;
        xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvPicPr>");

        xml.push_str("<p:blipFill>");
        xml.push_str(r#"<a:blip r:embed="rId2"/>"#);
        xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
        xml.push_str("</p:blipFill>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y).map_err(fmt_err)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, cx, cy).map_err(fmt_err)?;
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("</p:spPr>");
        xml.push_str("</p:pic>");

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DeckSerializer<P> for PptxWriter
where
    P: PageImage + EncodablePage,
{
    fn serialize(&self, deck: &SlideDeck<P>, out: &mut dyn Write) -> Result<()> {
        let cursor = self.write_to(deck, Cursor::new(Vec::new()))?;
        out.write_all(&cursor.into_inner())?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "pptx"
    }
}

fn package_rels_xml() -> Result<String> {
    let mut xml = String::with_capacity(768);
    xml.push_str(parts::XML_DECLARATION);
    write!(xml, r#"<Relationships xmlns="{}">"#, parts::NS_RELS).map_err(fmt_err)?;
    let targets = [
        (rel_types::OFFICE_DOCUMENT, parts::PRESENTATION_PATH),
        (rel_types::CORE_PROPERTIES, parts::CORE_PROPERTIES_PATH),
        (rel_types::EXTENDED_PROPERTIES, parts::APP_PROPERTIES_PATH),
    ];
    for (idx, (rel_type, target)) in targets.iter().enumerate() {
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="{}" Target="{}"/>"#,
            idx + 1,
            rel_type,
            target
        )
        .map_err(fmt_err)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn presentation_xml(slide_count: usize, slide_cx: i64, slide_cy: i64) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(parts::XML_DECLARATION);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        parts::NS_A,
        parts::NS_R,
        parts::NS_P
    )
    .map_err(fmt_err)?;

    xml.push_str("<p:sldMasterIdLst>");
    write!(
        xml,
        r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
        SLIDE_MASTER_REL_ID
    )
    .map_err(fmt_err)?;
    xml.push_str("</p:sldMasterIdLst>");

    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for idx in 0..slide_count {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + idx,
                FIRST_SLIDE_REL + idx
            )
            .map_err(fmt_err)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(xml, r#"<p:sldSz cx="{}" cy="{}"/>"#, slide_cx, slide_cy).map_err(fmt_err)?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");

    Ok(xml)
}

fn presentation_rels_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512 + slide_count * 160);
    xml.push_str(parts::XML_DECLARATION);
    write!(xml, r#"<Relationships xmlns="{}">"#, parts::NS_RELS).map_err(fmt_err)?;
    write!(
        xml,
        r#"<Relationship Id="{}" Type="{}" Target="slideMasters/slideMaster1.xml"/>"#,
        SLIDE_MASTER_REL_ID,
        rel_types::SLIDE_MASTER
    )
    .map_err(fmt_err)?;
    write!(
        xml,
        r#"<Relationship Id="{}" Type="{}" Target="theme/theme1.xml"/>"#,
        THEME_REL_ID,
        rel_types::THEME
    )
    .map_err(fmt_err)?;
    for idx in 0..slide_count {
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="{}" Target="slides/slide{}.xml"/>"#,
            FIRST_SLIDE_REL + idx,
            rel_types::SLIDE,
            idx + 1
        )
        .map_err(fmt_err)?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn slide_rels_xml(media_name: &str) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(parts::XML_DECLARATION);
    write!(xml, r#"<Relationships xmlns="{}">"#, parts::NS_RELS).map_err(fmt_err)?;
    write!(
        xml,
        r#"<Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>"#,
        rel_types::SLIDE_LAYOUT
    )
    .map_err(fmt_err)?;
    write!(
        xml,
        r#"<Relationship Id="rId2" Type="{}" Target="../media/{}"/>"#,
        rel_types::IMAGE,
        media_name
    )
    .map_err(fmt_err)?;
    xml.push_str("</Relationships>");
    Ok(xml)
}

fn app_properties_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(parts::XML_DECLARATION);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    write!(
        xml,
        "<Application>{}</Application>",
        env!("CARGO_PKG_NAME")
    )
    .map_err(fmt_err)?;
    write!(xml, "<Slides>{}</Slides>", slide_count).map_err(fmt_err)?;
    xml.push_str("</Properties>");
    Ok(xml)
}

/// Warn when a slide size falls outside what PowerPoint will open.
fn check_slide_size(cx: i64, cy: i64) {
    for (axis, size) in [("width", cx), ("height", cy)] {
        if !(MIN_SLIDE_EMU..=MAX_SLIDE_EMU).contains(&size) {
            log::warn!(
                "Slide {} of {} EMU is outside PowerPoint's range {}..={}",
                axis,
                size,
                MIN_SLIDE_EMU,
                MAX_SLIDE_EMU
            );
        }
    }
}

fn write_entry<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &str,
    bytes: &[u8],
    options: FileOptions,
) -> Result<()> {
    zip.start_file(path, options)
        .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", path, e)))?;
    zip.write_all(bytes)
        .map_err(|e| Error::ZipError(format!("Failed to write '{}': {}", path, e)))?;
    Ok(())
}

fn fmt_err(e: std::fmt::Error) -> Error {
    Error::XmlError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{PictureFrame, PptxLayoutReader};
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use pdf2pptx_core::build_slide_instructions;
    use std::io::Read;
    use zip::ZipArchive;

    fn page(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 30, 30])))
    }

    fn write_deck(writer: &PptxWriter, pages: Vec<DynamicImage>) -> Vec<u8> {
        let deck = build_slide_instructions(pages).unwrap();
        let mut out = Vec::new();
        writer.serialize(&deck, &mut out).unwrap();
        out
    }

    fn read_entry(bytes: &[u8], path: &str) -> Vec<u8> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(path).unwrap();
        let mut content = Vec::new();
        file.read_to_end(&mut content).unwrap();
        content
    }

    #[test]
    fn test_round_trip_layout() {
        let bytes = write_deck(&PptxWriter::new(), vec![page(80, 40), page(40, 80), page(80, 80)]);

        let layout = PptxLayoutReader::new().read(Cursor::new(bytes)).unwrap();

        // Canvas 80x80 points
        assert_eq!(layout.slide_width, 80 * EMU_PER_POINT);
        assert_eq!(layout.slide_height, 80 * EMU_PER_POINT);
        assert_eq!(layout.slides.len(), 3);

        let frames: Vec<PictureFrame> = layout
            .slides
            .iter()
            .map(|s| {
                assert_eq!(s.pictures.len(), 1);
                s.pictures[0]
            })
            .collect();
        assert_eq!(
            frames,
            vec![
                PictureFrame {
                    x: 0,
                    y: 20 * EMU_PER_POINT,
                    cx: 80 * EMU_PER_POINT,
                    cy: 40 * EMU_PER_POINT,
                },
                PictureFrame {
                    x: 20 * EMU_PER_POINT,
                    y: 0,
                    cx: 40 * EMU_PER_POINT,
                    cy: 80 * EMU_PER_POINT,
                },
                PictureFrame {
                    x: 0,
                    y: 0,
                    cx: 80 * EMU_PER_POINT,
                    cy: 80 * EMU_PER_POINT,
                },
            ]
        );
        assert_eq!(layout.slides[2].path, "ppt/slides/slide3.xml");
    }

    #[test]
    fn test_half_unit_offset_is_exact() {
        // 33 leftover points split into 16.5 on each side
        let bytes = write_deck(&PptxWriter::new(), vec![page(100, 99), page(3, 2)]);
        let layout = PptxLayoutReader::new().read(Cursor::new(bytes)).unwrap();

        let frame = layout.slides[1].pictures[0];
        assert_eq!(frame.y, 16 * EMU_PER_POINT + EMU_PER_POINT / 2);
        assert_eq!(frame.cy, 66 * EMU_PER_POINT);
    }

    #[test]
    fn test_custom_emu_per_unit() {
        let writer = PptxWriter::new().with_emu_per_unit(9525);
        let bytes = write_deck(&writer, vec![page(96, 48)]);
        let layout = PptxLayoutReader::new().read(Cursor::new(bytes)).unwrap();

        assert_eq!(layout.slide_width, 96 * 9525);
        assert_eq!(layout.slide_height, 48 * 9525);
    }

    #[test]
    fn test_jpeg_media_embedded() {
        let bytes = write_deck(&PptxWriter::new(), vec![page(16, 8), page(8, 16)]);

        let media = read_entry(&bytes, "ppt/media/image2.jpeg");
        let decoded = image::load_from_memory_with_format(&media, ImageFormat::Jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 16));

        let rels =
            String::from_utf8(read_entry(&bytes, "ppt/slides/_rels/slide2.xml.rels")).unwrap();
        assert!(rels.contains(r#"Target="../media/image2.jpeg""#));

        let types = String::from_utf8(read_entry(&bytes, "[Content_Types].xml")).unwrap();
        assert!(types.contains(r#"<Default Extension="jpeg" ContentType="image/jpeg"/>"#));
        assert!(types.contains("/ppt/slides/slide2.xml"));
        assert!(!types.contains("/ppt/slides/slide3.xml"));
    }

    #[test]
    fn test_png_keeps_alpha() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 10])));
        let writer = PptxWriter::new().with_encoding(ImageEncoding::Png);
        let bytes = write_deck(&writer, vec![rgba]);

        let media = read_entry(&bytes, "ppt/media/image1.png");
        let decoded = image::load_from_memory_with_format(&media, ImageFormat::Png).unwrap();
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn test_jpeg_flattens_alpha() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 10])));
        let encoded = rgba.encode(ImageEncoding::Jpeg).unwrap();
        assert!(image::load_from_memory_with_format(&encoded, ImageFormat::Jpeg).is_ok());
    }

    #[test]
    fn test_package_properties_parts() {
        let bytes = write_deck(&PptxWriter::new(), vec![page(4, 4), page(4, 4)]);

        let rels = String::from_utf8(read_entry(&bytes, "_rels/.rels")).unwrap();
        assert!(rels.contains(r#"Id="rId1""#));
        assert!(rels.contains(r#"Target="ppt/presentation.xml""#));
        assert!(rels.contains(r#"Target="docProps/core.xml""#));
        assert!(rels.contains(r#"Target="docProps/app.xml""#));

        let core = String::from_utf8(read_entry(&bytes, "docProps/core.xml")).unwrap();
        assert!(core.contains("<cp:coreProperties"));
        assert!(!core.contains("<dc:title>"));

        let app = String::from_utf8(read_entry(&bytes, "docProps/app.xml")).unwrap();
        assert!(app.contains("<Slides>2</Slides>"));
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let xml = presentation_xml(2, 100, 200).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/><p:sldId id="257" r:id="rId4"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="100" cy="200"/>"#));

        let rels = presentation_rels_xml(2).unwrap();
        assert!(rels.contains(r#"Id="rId4""#));
        assert!(rels.contains(r#"Target="slides/slide2.xml""#));
    }

    #[test]
    fn test_image_encoding_from_str() {
        assert_eq!("JPG".parse::<ImageEncoding>().unwrap(), ImageEncoding::Jpeg);
        assert_eq!("png".parse::<ImageEncoding>().unwrap(), ImageEncoding::Png);
        assert!("gif".parse::<ImageEncoding>().is_err());
    }

    #[test]
    fn test_extension() {
        assert_eq!(DeckSerializer::<DynamicImage>::extension(&PptxWriter::new()), "pptx");
    }
}
