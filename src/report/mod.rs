//! Report assembly: turns a batch of extracted documents into laid-out pages.
//!
//! The assembler walks the batch once, in order:
//!
//! 1. a summary section with the title, total and successful counts,
//! 2. one section per document: title, then either a character count and
//!    the shaped, wrapped body, or a fixed placeholder when nothing was
//!    extracted,
//! 3. the layout engine is flushed and footers are numbered.
//!
//! An empty or failed document never aborts the batch.
//!
//! # Example
//!
//! ```
//! use ocrpdf::model::Document;
//! use ocrpdf::report::assemble;
//!
//! let batch = Document::batch(vec![("a.pdf", "Hello world"), ("b.pdf", "")]);
//! let report = assemble(&batch, false);
//! assert_eq!(report.summary.total, 2);
//! assert_eq!(report.summary.succeeded, 1);
//! ```

mod labels;
mod options;

pub use options::{ReportOptions, DEFAULT_FILE_NAME, DEFAULT_OUTPUT_DIR};

use chrono::Local;
use labels::Script;
use std::fmt;

use crate::layout::{wrap, DocumentBreak, LayoutEngine, Section};
use crate::model::{
    Alignment, Document, EntryStatus, Extraction, Line, Report, ReportEntry, Summary, TextStyle,
};
use crate::shape::{shape, shape_lines, shape_outcome_with, ShapeOutcome};

/// Cell heights in millimetres.
const TITLE_HEIGHT: f32 = 10.0;
const SUMMARY_HEIGHT: f32 = 8.0;
const META_HEIGHT: f32 = 6.0;
const BODY_HEIGHT: f32 = 8.0;
const FOOTER_HEIGHT: f32 = 10.0;

/// Vertical gaps in millimetres.
const SECTION_GAP: f32 = 10.0;
const TITLE_GAP: f32 = 5.0;
const PARAGRAPH_GAP: f32 = 4.0;

/// Builds a [`Report`] from a batch of documents.
#[derive(Clone)]
pub struct ReportAssembler {
    options: ReportOptions,
    script: Script,
    shaper: fn(&str) -> String,
}

impl ReportAssembler {
    /// Create an assembler; the label set follows `options.shaping`.
    pub fn new(options: ReportOptions) -> Self {
        let script = Script::for_shaping(options.shaping);
        Self {
            options,
            script,
            shaper: shape_lines,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_shaper(mut self, shaper: fn(&str) -> String) -> Self {
        self.shaper = shaper;
        self
    }

    /// Get the options in use.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Assemble the report for `batch`, preserving batch order.
    pub fn assemble(&self, batch: &[Document]) -> Report {
        let generated_at = self
            .options
            .generated_at
            .unwrap_or_else(|| Local::now().naive_local())
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        let summary = Summary {
            total: batch.len(),
            succeeded: batch.iter().filter(|doc| doc.is_success()).count(),
        };

        let layout = &self.options.layout;
        let mut engine = LayoutEngine::new(layout.page.content_height());
        if layout.header {
            engine = engine.with_header(vec![self.header_line(), Line::spacer(SECTION_GAP)]);
        }

        engine.push_section(self.summary_section(&generated_at, &summary));

        let mut entries = Vec::with_capacity(batch.len());
        for (index, doc) in batch.iter().enumerate() {
            let is_last = index + 1 == batch.len();
            let (section, entry) = self.document_section(index + 1, doc, is_last);
            engine.push_section(section);
            entries.push(entry);
        }

        let mut pages = engine.finish();
        if layout.footer {
            for page in &mut pages {
                page.footer = Some(self.footer_line(page.number));
            }
        }

        log::info!(
            "Assembled report: {} documents ({} with text) on {} pages",
            summary.total,
            summary.succeeded,
            pages.len()
        );

        Report {
            title: self.script.document_title().to_string(),
            generated_at,
            summary,
            shaped: self.options.shaping,
            entries,
            pages,
        }
    }

    fn summary_section(&self, generated_at: &str, summary: &Summary) -> Section {
        Section::new()
            .title(
                self.styled(&self.script.report_title(generated_at), TextStyle::bold(16.0))
                    .with_align(Alignment::Center)
                    .with_height(TITLE_HEIGHT),
            )
            .title(Line::spacer(SECTION_GAP))
            .body(
                self.styled(&self.script.total_files(summary.total), TextStyle::new(12.0))
                    .with_height(SUMMARY_HEIGHT),
            )
            .body(
                self.styled(&self.script.successful(summary.succeeded), TextStyle::new(12.0))
                    .with_height(SUMMARY_HEIGHT),
            )
            .body(Line::spacer(SECTION_GAP))
    }

    /// Build the section for the document at batch position `ordinal`.
    ///
    /// The body is shaped as a whole paragraph and wrapped afterwards, so a
    /// right-to-left paragraph longer than one line starts with its last
    /// words. Callers that need per-line shaping must wrap first and shape
    /// each line; this order is kept as is.
    fn document_section(
        &self,
        ordinal: usize,
        doc: &Document,
        is_last: bool,
    ) -> (Section, ReportEntry) {
        let title = self
            .styled(
                &self.script.file_title(ordinal, doc.display_name()),
                TextStyle::bold(14.0),
            )
            .with_height(TITLE_HEIGHT);
        let mut section = Section::for_document(ordinal)
            .title(title)
            .title(Line::spacer(TITLE_GAP));

        let status = if doc.is_success() {
            let outcome = shape_outcome_with(doc.text(), self.options.shaping, self.shaper);
            let status = match &outcome {
                ShapeOutcome::Shaped(_) => EntryStatus::Shaped,
                ShapeOutcome::Degraded(_) => EntryStatus::ShapingDegraded,
                ShapeOutcome::Unchanged(_) => EntryStatus::Plain,
            };

            let meta = self
                .styled(
                    &self.script.char_count(doc.char_count()),
                    TextStyle::italic(10.0),
                )
                .with_height(META_HEIGHT);
            let body = wrap(outcome.text(), self.options.layout.max_chars)
                .into_iter()
                .map(|line| self.body_line(line));

            section = section
                .body(meta)
                .body(Line::spacer(TITLE_GAP))
                .body_lines(body);
            status
        } else {
            let status = match &doc.extraction {
                Extraction::Failed(reason) => {
                    log::warn!("No text for {}: {}", doc.name, reason);
                    EntryStatus::Failed(reason.clone())
                }
                Extraction::Text(_) | Extraction::Empty => EntryStatus::Empty,
            };
            section = section.body(
                self.styled(self.script.no_text(), TextStyle::new(10.0))
                    .with_height(BODY_HEIGHT),
            );
            status
        };

        if !is_last {
            section = section
                .body(Line::spacer(SECTION_GAP))
                .break_after(self.options.layout.document_break == DocumentBreak::Always);
        }

        let entry = ReportEntry {
            ordinal,
            name: doc.display_name().to_string(),
            char_count: doc.char_count(),
            status,
        };
        (section, entry)
    }

    /// Restyle a wrapped line as body text; blank lines become short gaps.
    fn body_line(&self, line: Line) -> Line {
        if line.is_blank() {
            return Line::spacer(PARAGRAPH_GAP);
        }
        line.with_direction(self.script.direction())
            .with_style(TextStyle::new(10.0))
            .with_height(BODY_HEIGHT)
    }

    fn header_line(&self) -> Line {
        self.styled(self.script.page_header(), TextStyle::bold(15.0))
            .with_align(Alignment::Center)
            .with_height(TITLE_HEIGHT)
    }

    fn footer_line(&self, number: u32) -> Line {
        self.styled(&self.script.page_footer(number), TextStyle::italic(8.0))
            .with_align(Alignment::Center)
            .with_height(FOOTER_HEIGHT)
    }

    /// Shape a label (when enabled) and attach the script direction.
    fn styled(&self, text: &str, style: TextStyle) -> Line {
        Line::new(shape(text, self.options.shaping))
            .with_direction(self.script.direction())
            .with_style(style)
    }
}

impl fmt::Debug for ReportAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportAssembler")
            .field("options", &self.options)
            .field("script", &self.script)
            .finish_non_exhaustive()
    }
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

/// Assemble a report with default options.
pub fn assemble(batch: &[Document], shaping_enabled: bool) -> Report {
    ReportAssembler::new(ReportOptions::default().with_shaping(shaping_enabled)).assemble(batch)
}
