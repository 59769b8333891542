//! CLI tool for converting PDF documents into PowerPoint slide decks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pdf2pptx_core::{Converter, DEFAULT_DPI};
use pdf2pptx_pptx::{ImageEncoding, PptxLayoutReader, PptxWriter};
use pdf2pptx_render::PdfiumRasterizer;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Convert PDF files into slide decks with one full-page image per slide.
#[derive(Parser, Debug)]
#[command(name = "pdf2pptx")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PDF file(s); files without a .pdf extension are skipped
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rendering resolution in dots per inch
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_DPI,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    dpi: u16,

    /// Encoding of the embedded page images
    #[arg(short, long, value_enum, default_value_t = Format::Jpeg)]
    format: Format,

    /// Convert at most this many pages of each document
    #[arg(long)]
    max_pages: Option<usize>,

    /// Print the slide layout as JSON instead of writing decks
    #[arg(long, conflicts_with = "inspect")]
    dry_run: bool,

    /// Treat inputs as .pptx files and print their layout as JSON
    #[arg(long)]
    inspect: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Jpeg,
    Png,
}

impl From<Format> for ImageEncoding {
    fn from(format: Format) -> Self {
        match format {
            Format::Jpeg => ImageEncoding::Jpeg,
            Format::Png => ImageEncoding::Png,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = if args.inspect {
        inspect_files(&args)
    } else {
        convert_files(&args)
    };

    match result {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            log::error!("{} of {} files failed", failed, args.input.len());
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Convert every PDF input, returning how many failed.
fn convert_files(args: &Args) -> Result<usize> {
    let rasterizer = PdfiumRasterizer::new()
        .context("Failed to initialize the PDF renderer")?
        .with_max_pages(args.max_pages);
    let writer = PptxWriter::new().with_encoding(args.format.into());
    let converter = Converter::new(rasterizer, writer).with_dpi(args.dpi);

    if let (Some(dir), false) = (&args.output, args.dry_run) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let mut failed = 0;
    for input_path in &args.input {
        if !is_pdf(input_path) {
            log::info!("Skipping non-PDF input {}", input_path.display());
            continue;
        }

        if args.dry_run {
            match converter.plan(input_path) {
                Ok(layout) => println!("{}", serde_json::to_string_pretty(&layout)?),
                Err(e) => {
                    failed += 1;
                    log::error!("Failed to plan {}: {}", input_path.display(), e);
                }
            }
            continue;
        }

        let output_path = converter.output_path_for(input_path, args.output.as_deref());
        println!("{} -> {}", input_path.display(), output_path.display());

        match converter.convert(input_path, &output_path) {
            Ok(report) => {
                log::debug!(
                    "Wrote {} slides at {}x{} to {}",
                    report.pages,
                    report.canvas.width,
                    report.canvas.height,
                    report.output.display()
                );
            }
            Err(e) => {
                failed += 1;
                log::error!("Failed to convert {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(failed)
}

/// Print the layout of every input deck, returning how many failed.
fn inspect_files(args: &Args) -> Result<usize> {
    let reader = PptxLayoutReader::new();

    let mut failed = 0;
    for input_path in &args.input {
        match inspect_file(&reader, input_path) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                failed += 1;
                log::error!("Failed to inspect {}: {:#}", input_path.display(), e);
            }
        }
    }

    Ok(failed)
}

fn inspect_file(reader: &PptxLayoutReader, input_path: &Path) -> Result<String> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let layout = reader.read(BufReader::new(file))?;
    Ok(serde_json::to_string_pretty(&layout)?)
}

/// Whether a path has a `.pdf` extension, ignoring case.
fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(Path::new("slides.pdf")));
        assert!(is_pdf(Path::new("dir/SLIDES.PDF")));
        assert!(!is_pdf(Path::new("slides.pptx")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["pdf2pptx", "a.pdf", "b.pdf"]).unwrap();
        assert_eq!(args.input.len(), 2);
        assert_eq!(args.dpi, 120);
        assert!(matches!(args.format, Format::Jpeg));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_args_options() {
        let args = Args::try_parse_from([
            "pdf2pptx", "-d", "300", "--format", "png", "--max-pages", "5", "-o", "out", "a.pdf",
        ])
        .unwrap();
        assert_eq!(args.dpi, 300);
        assert!(matches!(ImageEncoding::from(args.format), ImageEncoding::Png));
        assert_eq!(args.max_pages, Some(5));
        assert_eq!(args.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_args_reject_zero_dpi() {
        assert!(Args::try_parse_from(["pdf2pptx", "--dpi", "0", "a.pdf"]).is_err());
        let args = Args::try_parse_from(["pdf2pptx", "--dpi", "1", "a.pdf"]).unwrap();
        assert_eq!(args.dpi, 1);
    }

    #[test]
    fn test_args_require_input() {
        assert!(Args::try_parse_from(["pdf2pptx"]).is_err());
    }

    #[test]
    fn test_dry_run_conflicts_with_inspect() {
        assert!(Args::try_parse_from(["pdf2pptx", "--dry-run", "--inspect", "a.pdf"]).is_err());
    }
}
