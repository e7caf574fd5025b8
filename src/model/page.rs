//! Page-level types.

use super::Line;
use serde::{Deserialize, Serialize};

/// Why a page block was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakReason {
    /// First page of the report
    Start,
    /// The previous page ran out of vertical space
    Overflow,
    /// The previous page was closed by the document break policy
    Forced,
}

/// The committed content of one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBlock {
    /// Page number (1-indexed)
    pub number: u32,

    /// Running header repeated on every page
    pub header: Vec<Line>,

    /// Content lines in top-to-bottom order
    pub lines: Vec<Line>,

    /// Page footer, placed in the bottom margin
    pub footer: Option<Line>,

    /// How this page came to be opened
    pub opened_by: BreakReason,

    /// Vertical space consumed, in millimetres (header included)
    pub used_height: f32,

    /// Ordinals of the documents with content on this page
    pub documents: Vec<usize>,
}

impl PageBlock {
    /// Create an empty page block.
    pub fn new(number: u32, opened_by: BreakReason) -> Self {
        Self {
            number,
            header: Vec::new(),
            lines: Vec::new(),
            footer: None,
            opened_by,
            used_height: 0.0,
            documents: Vec::new(),
        }
    }

    /// Check if the page has no visible content lines.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Line::is_blank)
    }

    /// Iterate over the lines that carry visible text.
    pub fn text_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| !line.is_blank())
    }

    /// Get plain text of the page content (header and footer excluded).
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Record that a document has content on this page.
    pub(crate) fn mark_document(&mut self, ordinal: usize) {
        if self.documents.last() != Some(&ordinal) {
            self.documents.push(ordinal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_block_new() {
        let page = PageBlock::new(1, BreakReason::Start);
        assert_eq!(page.number, 1);
        assert!(page.is_empty());
        assert!(page.footer.is_none());
    }

    #[test]
    fn test_spacers_do_not_count_as_content() {
        let mut page = PageBlock::new(2, BreakReason::Overflow);
        page.lines.push(Line::spacer(10.0));
        assert!(page.is_empty());

        page.lines.push(Line::new("text"));
        assert!(!page.is_empty());
        assert_eq!(page.text_lines().count(), 1);
        assert_eq!(page.plain_text(), "\ntext");
    }

    #[test]
    fn test_mark_document_dedups_consecutive() {
        let mut page = PageBlock::new(1, BreakReason::Start);
        page.mark_document(1);
        page.mark_document(1);
        page.mark_document(2);
        assert_eq!(page.documents, vec![1, 2]);
    }
}
