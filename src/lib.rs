//! # ocrpdf
//!
//! Batch OCR report generation for Rust.
//!
//! This library takes the text extracted from a batch of scanned PDF files
//! and lays it out as a single paginated report: a summary block, then one
//! section per file with its extracted text wrapped and, for Persian or
//! Arabic text, shaped for right-to-left display.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ocrpdf::{create_report, Document, ReportOptions};
//!
//! let batch = Document::batch(vec![
//!     ("scans/a.pdf", "Hello world"),
//!     ("scans/b.pdf", ""),
//! ]);
//!
//! match create_report(&batch, &ReportOptions::default()) {
//!     Some(path) => println!("Report saved to {}", path.display()),
//!     None => eprintln!("Report could not be written"),
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Shaping** ([`shape`]): contextual joining and bidi reordering
//! - **Wrapping** ([`wrap`]): greedy, character-bounded line breaking
//! - **Layout** ([`layout`]): pagination with overflow and forced breaks
//! - **Assembly** ([`report`]): summary and per-document sections
//! - **Output** ([`writer`]): PDF via `printpdf`, or a plain-text recording

pub mod discover;
pub mod error;
pub mod layout;
pub mod model;
pub mod ocr;
pub mod report;
pub mod shape;
pub mod writer;

// Re-export commonly used types
pub use discover::{find_pdfs, is_pdf_bytes};
pub use error::{Error, Result};
pub use layout::{DocumentBreak, LayoutEngine, LayoutOptions, PageGeometry, Section};
pub use model::{
    Alignment, BreakReason, Direction, Document, Emphasis, EntryStatus, Extraction, JsonFormat,
    Line, PageBlock, Report, ReportEntry, Side, Summary, TextStyle,
};
pub use ocr::parse_response;
pub use report::{ReportAssembler, ReportOptions};
pub use shape::{shape_outcome, ShapeOutcome};
pub use writer::{commit, save_report, PageWriter, PdfPageWriter, RecordingWriter};

use std::path::PathBuf;

/// Assemble a report for `batch` with default layout.
///
/// # Example
///
/// ```
/// use ocrpdf::{assemble, Document};
///
/// let batch = Document::batch(vec![("a.pdf", "Hello world")]);
/// let report = assemble(&batch, false);
/// assert_eq!(report.summary.succeeded, 1);
/// ```
pub fn assemble(batch: &[Document], shaping_enabled: bool) -> Report {
    report::assemble(batch, shaping_enabled)
}

/// Shape `text` for right-to-left display when `enabled`.
///
/// See [`shape::shape`].
pub fn shape(text: &str, enabled: bool) -> String {
    shape::shape(text, enabled)
}

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// See [`layout::wrap`].
pub fn wrap(text: &str, max_chars: usize) -> Vec<Line> {
    layout::wrap(text, max_chars)
}

/// Assemble `batch` and write it as a PDF to `options.output_path()`.
///
/// Returns the written path, or `None` when the options are invalid or the
/// writer fails. The failure is logged; the caller decides whether to
/// retry the batch.
pub fn create_report(batch: &[Document], options: &ReportOptions) -> Option<PathBuf> {
    create_report_with_font(batch, options, None)
}

/// Like [`create_report`], embedding the TrueType font in `font_bytes`.
///
/// A font the writer cannot parse is dropped with a warning: the report is
/// then written with the built-in fonts, shaping off and Latin labels.
pub fn create_report_with_font(
    batch: &[Document],
    options: &ReportOptions,
    font_bytes: Option<&[u8]>,
) -> Option<PathBuf> {
    match try_create_report(batch, options, font_bytes) {
        Ok(path) => Some(path),
        Err(err) => {
            log::error!("Failed to create report: {}", err);
            None
        }
    }
}

fn try_create_report(
    batch: &[Document],
    options: &ReportOptions,
    font_bytes: Option<&[u8]>,
) -> Result<PathBuf> {
    options.layout.validate()?;

    let fallback;
    let (options, font_bytes) = match font_bytes {
        Some(bytes) if !PdfPageWriter::accepts_font(bytes) => {
            log::warn!(
                "Font data ({} bytes) is not usable, writing without shaping",
                bytes.len()
            );
            fallback = options.clone().with_shaping(false);
            (&fallback, None)
        }
        other => (options, other),
    };

    let report = ReportAssembler::new(options.clone()).assemble(batch);
    let mut writer = PdfPageWriter::new(&report.title, options.layout.page);
    if let Some(bytes) = font_bytes {
        writer = writer.with_font_bytes(bytes)?;
    }
    save_report(&report, writer, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_shape_and_wrap() {
        assert_eq!(shape("plain", false), "plain");
        let lines = wrap("Hello world", 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Hello world");
    }

    #[test]
    fn test_create_report_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let options = ReportOptions::new().with_output_dir(dir.path().join("out"));
        let batch = Document::batch(vec![("a.pdf", "Hello world"), ("b.pdf", "")]);

        let path = create_report(&batch, &options).unwrap();
        assert_eq!(path, options.output_path());

        let bytes = std::fs::read(&path).unwrap();
        assert!(is_pdf_bytes(&bytes));
    }

    #[test]
    fn test_create_report_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let options = ReportOptions::new().with_output_dir(dir.path());
        assert!(create_report(&[], &options).is_some());
    }

    #[test]
    fn test_create_report_invalid_options() {
        let dir = tempfile::tempdir().unwrap();
        let options = ReportOptions::new()
            .with_output_dir(dir.path())
            .with_max_chars(0);
        assert!(create_report(&[], &options).is_none());
        assert!(!options.output_path().exists());
    }

    #[test]
    fn test_create_report_bad_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let options = ReportOptions::new()
            .with_output_dir(dir.path())
            .with_shaping(true);
        let batch = Document::batch(vec![("a.pdf", "سلام")]);

        let path = create_report_with_font(&batch, &options, Some(b"junk")).unwrap();
        assert!(is_pdf_bytes(&std::fs::read(path).unwrap()));
    }

    #[test]
    fn test_create_report_unwritable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let options = ReportOptions::new().with_output_dir(blocker.join("sub"));
        assert!(create_report(&[], &options).is_none());
    }
}
