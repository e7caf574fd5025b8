//! The assembled report.

use super::PageBlock;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Batch-level counts shown on the first page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of documents in the batch
    pub total: usize,

    /// Documents whose trimmed text is non-empty
    pub succeeded: usize,
}

impl Summary {
    /// Number of documents without usable text.
    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }
}

/// How a document's body ended up in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Text laid out as extracted
    Plain,
    /// Text reshaped and reordered for right-to-left display
    Shaped,
    /// Shaping failed; the unshaped text was laid out instead
    ShapingDegraded,
    /// No text was extracted; a placeholder was laid out
    Empty,
    /// Extraction failed; a placeholder was laid out
    Failed(String),
}

/// Per-document record of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Position in the batch (1-indexed)
    pub ordinal: usize,

    /// Displayed file name
    pub name: String,

    /// Characters in the raw extracted text
    pub char_count: usize,

    /// Body outcome
    pub status: EntryStatus,
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// A fully laid-out report, ready for a page writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Document title embedded in the output metadata
    pub title: String,

    /// Generation timestamp (`YYYY-MM-DD HH:MM:SS`)
    pub generated_at: String,

    /// Batch summary
    pub summary: Summary,

    /// Whether right-to-left shaping was enabled
    pub shaped: bool,

    /// Per-document outcomes in batch order
    pub entries: Vec<ReportEntry>,

    /// Pages in output order; the first holds the summary
    pub pages: Vec<PageBlock>,
}

impl Report {
    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&PageBlock> {
        if number == 0 {
            return None;
        }
        self.pages.get((number - 1) as usize)
    }

    /// Pages carrying content of the given document.
    pub fn pages_of(&self, ordinal: usize) -> impl Iterator<Item = &PageBlock> {
        self.pages
            .iter()
            .filter(move |page| page.documents.contains(&ordinal))
    }

    /// Get plain text of all pages, separated by form feeds.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(PageBlock::plain_text)
            .collect::<Vec<_>>()
            .join("\n\u{c}\n")
    }

    /// Serialize the report to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self)?,
            JsonFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BreakReason, Line};

    fn sample_report() -> Report {
        let mut first = PageBlock::new(1, BreakReason::Start);
        first.lines.push(Line::new("Total files processed: 1"));
        let mut second = PageBlock::new(2, BreakReason::Forced);
        second.lines.push(Line::new("File 1: a.pdf"));
        second.mark_document(1);

        Report {
            title: "OCR Results".to_string(),
            generated_at: "2024-01-01 00:00:00".to_string(),
            summary: Summary {
                total: 1,
                succeeded: 1,
            },
            shaped: false,
            entries: Vec::new(),
            pages: vec![first, second],
        }
    }

    #[test]
    fn test_summary_failed() {
        let summary = Summary {
            total: 5,
            succeeded: 3,
        };
        assert_eq!(summary.failed(), 2);
    }

    #[test]
    fn test_get_page() {
        let report = sample_report();
        assert_eq!(report.page_count(), 2);
        assert!(report.get_page(0).is_none());
        assert_eq!(report.get_page(2).unwrap().opened_by, BreakReason::Forced);
        assert!(report.get_page(3).is_none());
    }

    #[test]
    fn test_pages_of_document() {
        let report = sample_report();
        let numbers: Vec<u32> = report.pages_of(1).map(|p| p.number).collect();
        assert_eq!(numbers, vec![2]);
    }

    #[test]
    fn test_to_json_pretty_and_compact() {
        let report = sample_report();
        let pretty = report.to_json(JsonFormat::Pretty).unwrap();
        assert!(pretty.contains("\"summary\""));
        assert!(pretty.contains('\n'));

        let compact = report.to_json(JsonFormat::Compact).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.contains("\"opened_by\":\"forced\""));
    }
}
