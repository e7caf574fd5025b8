//! A page writer that records calls and renders them as plain text.

use super::PageWriter;
use crate::error::{Error, Result};
use crate::model::{Line, Side};
use std::fs;
use std::path::Path;

/// One recorded writer call.
#[derive(Debug, Clone, PartialEq)]
pub enum WriterEvent {
    /// A page was opened
    BeginPage(u32),
    /// A line was emitted (blank lines are recorded with empty text)
    Line {
        /// Visual-order text
        text: String,
        /// Resolved placement
        side: Side,
        /// Font size in points
        font_size: f32,
    },
    /// The footer was emitted
    Footer(String),
    /// The page was closed
    EndPage,
}

/// Records the writer call sequence.
///
/// `finish` writes a plain-text rendering of the pages, one form feed
/// between pages, with right and centre aligned lines padded to `width`.
#[derive(Debug, Clone)]
pub struct RecordingWriter {
    events: Vec<WriterEvent>,
    page_open: bool,
    width: usize,
}

impl RecordingWriter {
    /// Create a recorder rendering 80-column text.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            page_open: false,
            width: 80,
        }
    }

    /// Set the column width used by [`to_text`](Self::to_text).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Recorded events in call order.
    pub fn events(&self) -> &[WriterEvent] {
        &self.events
    }

    /// Number of pages opened so far.
    pub fn page_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, WriterEvent::BeginPage(_)))
            .count()
    }

    /// Render the recorded pages as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            match event {
                WriterEvent::BeginPage(number) if *number > 1 => out.push('\u{c}'),
                WriterEvent::BeginPage(_) | WriterEvent::EndPage => {}
                WriterEvent::Line { text, side, .. } => {
                    out.push_str(&self.place(text, *side));
                    out.push('\n');
                }
                WriterEvent::Footer(text) => {
                    out.push_str(&self.place(text, Side::Center));
                    out.push('\n');
                }
            }
        }
        out
    }

    fn place(&self, text: &str, side: Side) -> String {
        let len = text.chars().count();
        let pad = self.width.saturating_sub(len);
        match side {
            Side::Left => text.to_string(),
            Side::Right => format!("{}{}", " ".repeat(pad), text),
            Side::Center => format!("{}{}", " ".repeat(pad / 2), text),
        }
    }

    fn require_open(&self, call: &str) -> Result<()> {
        if self.page_open {
            Ok(())
        } else {
            Err(Error::Writer(format!("{} outside an open page", call)))
        }
    }
}

impl Default for RecordingWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWriter for RecordingWriter {
    fn begin_page(&mut self, number: u32) -> Result<()> {
        if self.page_open {
            return Err(Error::Writer(format!(
                "page {} begun while another page is open",
                number
            )));
        }
        self.page_open = true;
        self.events.push(WriterEvent::BeginPage(number));
        Ok(())
    }

    fn emit_line(&mut self, line: &Line) -> Result<()> {
        self.require_open("emit_line")?;
        self.events.push(WriterEvent::Line {
            text: line.text.clone(),
            side: line.side(),
            font_size: line.style.font_size,
        });
        Ok(())
    }

    fn emit_footer(&mut self, line: &Line) -> Result<()> {
        self.require_open("emit_footer")?;
        self.events.push(WriterEvent::Footer(line.text.clone()));
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        self.require_open("end_page")?;
        self.page_open = false;
        self.events.push(WriterEvent::EndPage);
        Ok(())
    }

    fn finish(self, path: &Path) -> Result<()> {
        if self.page_open {
            return Err(Error::Writer("finish called with a page still open".to_string()));
        }
        fs::write(path, self.to_text())
            .map_err(|e| Error::Writer(format!("failed to write {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Direction};

    #[test]
    fn test_emit_outside_page_fails() {
        let mut writer = RecordingWriter::new();
        let result = writer.emit_line(&Line::new("orphan"));
        assert!(matches!(result, Err(Error::Writer(_))));
        assert!(writer.events().is_empty());
    }

    #[test]
    fn test_double_begin_fails() {
        let mut writer = RecordingWriter::new();
        writer.begin_page(1).unwrap();
        assert!(writer.begin_page(2).is_err());
    }

    #[test]
    fn test_to_text_alignment() {
        let mut writer = RecordingWriter::new().with_width(10);
        writer.begin_page(1).unwrap();
        writer.emit_line(&Line::new("left")).unwrap();
        writer
            .emit_line(&Line::new("right").with_direction(Direction::Rtl))
            .unwrap();
        writer
            .emit_line(&Line::new("mid").with_align(Alignment::Center))
            .unwrap();
        writer.end_page().unwrap();
        writer.begin_page(2).unwrap();
        writer.emit_footer(&Line::new("p2")).unwrap();
        writer.end_page().unwrap();

        assert_eq!(writer.to_text(), "left\n     right\n   mid\n\u{c}    p2\n");
    }

    #[test]
    fn test_finish_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let mut writer = RecordingWriter::new();
        writer.begin_page(1).unwrap();
        writer.emit_line(&Line::new("Hello")).unwrap();
        writer.end_page().unwrap();
        writer.finish(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Hello\n");
    }

    #[test]
    fn test_finish_with_open_page_fails() {
        let mut writer = RecordingWriter::new();
        writer.begin_page(1).unwrap();
        assert!(writer.finish(Path::new("never-written.txt")).is_err());
    }
}
