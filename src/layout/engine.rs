//! Page layout engine: accumulates lines and decides page breaks.

use crate::model::{BreakReason, Line, PageBlock};

/// A logical group of lines laid out together.
#[derive(Debug, Clone, Default)]
pub struct Section {
    /// Batch ordinal of the document this section belongs to, if any
    pub ordinal: Option<usize>,

    /// Title block, kept on the same page as the first body line
    pub title_lines: Vec<Line>,

    /// Body lines
    pub body_lines: Vec<Line>,

    /// Seal the page after this section even if space remains
    pub force_new_page_after: bool,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a section for the document at `ordinal`.
    pub fn for_document(ordinal: usize) -> Self {
        Self {
            ordinal: Some(ordinal),
            ..Self::default()
        }
    }

    /// Append a title line.
    pub fn title(mut self, line: Line) -> Self {
        self.title_lines.push(line);
        self
    }

    /// Append a body line.
    pub fn body(mut self, line: Line) -> Self {
        self.body_lines.push(line);
        self
    }

    /// Append several body lines.
    pub fn body_lines(mut self, lines: impl IntoIterator<Item = Line>) -> Self {
        self.body_lines.extend(lines);
        self
    }

    /// Force a page break after this section.
    pub fn break_after(mut self, force: bool) -> Self {
        self.force_new_page_after = force;
        self
    }

    /// Height of the title block plus the first body line.
    fn lead_height(&self) -> f32 {
        let title: f32 = self.title_lines.iter().map(|line| line.height).sum();
        let first_body = self
            .body_lines
            .iter()
            .find(|line| !line.is_blank())
            .map_or(0.0, |line| line.height);
        title + first_body
    }
}

/// Accumulates lines into page blocks of bounded height.
///
/// A text line that would overflow the remaining space seals the open page
/// and continues on a fresh one. Blank lines only advance the cursor and
/// never open a page on their own.
#[derive(Debug)]
pub struct LayoutEngine {
    capacity: f32,
    header: Vec<Line>,
    header_height: f32,
    pages: Vec<PageBlock>,
    open: PageBlock,
    current_ordinal: Option<usize>,
}

impl LayoutEngine {
    /// Create an engine for pages offering `capacity` millimetres of content.
    pub fn new(capacity: f32) -> Self {
        Self {
            capacity,
            header: Vec::new(),
            header_height: 0.0,
            pages: Vec::new(),
            open: PageBlock::new(1, BreakReason::Start),
            current_ordinal: None,
        }
    }

    /// Repeat `lines` at the top of every page.
    pub fn with_header(mut self, lines: Vec<Line>) -> Self {
        self.header_height = lines.iter().map(|line| line.height).sum();
        self.header = lines;
        self.open = self.fresh_page(1, BreakReason::Start);
        self
    }

    /// Vertical space left on the open page.
    pub fn remaining(&self) -> f32 {
        (self.capacity - self.open.used_height).max(0.0)
    }

    /// Number of sealed pages so far.
    pub fn sealed_pages(&self) -> usize {
        self.pages.len()
    }

    /// Lay out one section.
    pub fn push_section(&mut self, section: Section) {
        self.current_ordinal = section.ordinal;

        if !self.open.is_empty() && section.lead_height() > self.remaining() {
            log::debug!(
                "Section {:?} does not fit ({:.1} mm left), starting page {}",
                section.ordinal,
                self.remaining(),
                self.open.number + 1
            );
            self.seal(BreakReason::Overflow);
        }

        for line in section.title_lines.into_iter().chain(section.body_lines) {
            self.push_line(line);
        }

        if section.force_new_page_after {
            self.force_break();
        }
    }

    /// Append a line, breaking the page first if it would overflow.
    pub fn push_line(&mut self, line: Line) {
        if line.is_blank() {
            self.open.used_height = (self.open.used_height + line.height).min(self.capacity);
            self.open.lines.push(line);
            return;
        }

        if self.open.used_height + line.height > self.capacity && !self.open.is_empty() {
            self.seal(BreakReason::Overflow);
        }

        self.open.used_height += line.height;
        if let Some(ordinal) = self.current_ordinal {
            self.open.mark_document(ordinal);
        }
        self.open.lines.push(line);
    }

    /// Seal the open page regardless of remaining space.
    ///
    /// Does nothing when the open page has no content yet.
    pub fn force_break(&mut self) {
        if self.open.is_empty() {
            return;
        }
        log::debug!("Forced page break after page {}", self.open.number);
        self.seal(BreakReason::Forced);
    }

    /// Seal the last page and return all pages in order.
    pub fn finish(mut self) -> Vec<PageBlock> {
        if !self.open.is_empty() || self.pages.is_empty() {
            let last = std::mem::replace(&mut self.open, PageBlock::new(0, BreakReason::Start));
            self.pages.push(last);
        }
        self.pages
    }

    fn seal(&mut self, reason: BreakReason) {
        let next = self.fresh_page(self.open.number + 1, reason);
        let sealed = std::mem::replace(&mut self.open, next);
        log::debug!(
            "Sealed page {} ({} lines, {:.1} mm)",
            sealed.number,
            sealed.lines.len(),
            sealed.used_height
        );
        self.pages.push(sealed);
    }

    fn fresh_page(&self, number: u32, reason: BreakReason) -> PageBlock {
        let mut page = PageBlock::new(number, reason);
        page.header = self.header.clone();
        page.used_height = self.header_height;
        page
    }
}

/// Lay out `sections` in order on pages offering `capacity` millimetres.
pub fn layout(sections: impl IntoIterator<Item = Section>, capacity: f32) -> Vec<PageBlock> {
    let mut engine = LayoutEngine::new(capacity);
    for section in sections {
        engine.push_section(section);
    }
    engine.finish()
}
