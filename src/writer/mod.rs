//! Page writers: the output side of a report.
//!
//! A [`PageWriter`] is driven through a strict call sequence per page
//! (`begin_page`, any number of `emit_line`, an optional `emit_footer`,
//! `end_page`) and finalized exactly once with `finish`.
//!
//! # Example
//!
//! ```no_run
//! use ocrpdf::model::Document;
//! use ocrpdf::report::{ReportAssembler, ReportOptions};
//! use ocrpdf::writer::{save_report, PdfPageWriter};
//!
//! fn main() -> ocrpdf::Result<()> {
//!     let options = ReportOptions::new();
//!     let batch = Document::batch(vec![("a.pdf", "Hello world")]);
//!     let report = ReportAssembler::new(options.clone()).assemble(&batch);
//!
//!     let writer = PdfPageWriter::new(&report.title, options.layout.page);
//!     let path = save_report(&report, writer, &options)?;
//!     println!("Saved {}", path.display());
//!     Ok(())
//! }
//! ```

mod pdf;
mod recording;

pub use pdf::PdfPageWriter;
pub use recording::{RecordingWriter, WriterEvent};

use crate::error::Result;
use crate::model::{Line, Report};
use crate::report::ReportOptions;
use std::fs;
use std::path::{Path, PathBuf};

/// Output surface for laid-out pages.
pub trait PageWriter {
    /// Open page `number` (1-indexed).
    fn begin_page(&mut self, number: u32) -> Result<()>;

    /// Emit a line below the previous one on the open page.
    fn emit_line(&mut self, line: &Line) -> Result<()>;

    /// Emit the footer of the open page in the bottom margin.
    fn emit_footer(&mut self, line: &Line) -> Result<()>;

    /// Close the open page.
    fn end_page(&mut self) -> Result<()>;

    /// Finalize the output and write it to `path`.
    fn finish(self, path: &Path) -> Result<()>
    where
        Self: Sized;
}

/// Drive `writer` through every page of `report`.
pub fn render_pages<W: PageWriter>(report: &Report, writer: &mut W) -> Result<()> {
    for page in &report.pages {
        writer.begin_page(page.number)?;
        for line in page.header.iter().chain(&page.lines) {
            writer.emit_line(line)?;
        }
        if let Some(footer) = &page.footer {
            writer.emit_footer(footer)?;
        }
        writer.end_page()?;
    }
    Ok(())
}

/// Write `report` through `writer` to `path`.
///
/// The writer is consumed: it is finalized on success and released on
/// every error path.
pub fn commit<W: PageWriter>(report: &Report, mut writer: W, path: &Path) -> Result<PathBuf> {
    if let Err(err) = render_pages(report, &mut writer) {
        log::warn!("Abandoning report output after writer error: {}", err);
        return Err(err);
    }
    writer.finish(path)?;
    log::info!("Report written to {}", path.display());
    Ok(path.to_path_buf())
}

/// Create the output directory from `options` and commit the report there.
pub fn save_report<W: PageWriter>(
    report: &Report,
    writer: W,
    options: &ReportOptions,
) -> Result<PathBuf> {
    fs::create_dir_all(&options.output_dir)?;
    commit(report, writer, &options.output_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::Document;
    use crate::report::assemble;

    /// Writer that fails on the n-th emitted line.
    struct FailingWriter {
        remaining: usize,
    }

    impl PageWriter for FailingWriter {
        fn begin_page(&mut self, _number: u32) -> Result<()> {
            Ok(())
        }

        fn emit_line(&mut self, _line: &Line) -> Result<()> {
            if self.remaining == 0 {
                return Err(Error::Writer("glyph missing".to_string()));
            }
            self.remaining -= 1;
            Ok(())
        }

        fn emit_footer(&mut self, _line: &Line) -> Result<()> {
            Ok(())
        }

        fn end_page(&mut self) -> Result<()> {
            Ok(())
        }

        fn finish(self, _path: &Path) -> Result<()> {
            panic!("finish must not run after a failed page");
        }
    }

    #[test]
    fn test_render_pages_sequence() {
        let batch = Document::batch(vec![("a.pdf", "Hello"), ("b.pdf", "World")]);
        let report = assemble(&batch, false);

        let mut writer = RecordingWriter::new();
        render_pages(&report, &mut writer).unwrap();

        let events = writer.events();
        assert_eq!(events.first(), Some(&WriterEvent::BeginPage(1)));
        assert_eq!(events.last(), Some(&WriterEvent::EndPage));
        assert_eq!(writer.page_count(), 2);
    }

    #[test]
    fn test_commit_stops_on_writer_error() {
        let report = assemble(&Document::batch(vec![("a.pdf", "Hello")]), false);
        let result = commit(
            &report,
            FailingWriter { remaining: 2 },
            Path::new("unused.pdf"),
        );
        assert!(matches!(result, Err(Error::Writer(_))));
    }
}
