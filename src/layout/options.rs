//! Layout options and page geometry.

use crate::error::{Error, Result};

/// Default maximum characters per wrapped line.
pub const DEFAULT_MAX_CHARS: usize = 80;

/// Physical page geometry in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width
    pub width_mm: f32,

    /// Page height
    pub height_mm: f32,

    /// Space above the first line
    pub top_margin_mm: f32,

    /// Space reserved at the bottom; the automatic page break triggers here
    pub bottom_margin_mm: f32,

    /// Left and right margins
    pub side_margin_mm: f32,
}

impl PageGeometry {
    /// A4 portrait with a 15 mm automatic page-break margin.
    pub fn a4() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            top_margin_mm: 10.0,
            bottom_margin_mm: 15.0,
            side_margin_mm: 10.0,
        }
    }

    /// US Letter portrait.
    pub fn letter() -> Self {
        Self {
            width_mm: 215.9,
            height_mm: 279.4,
            ..Self::a4()
        }
    }

    /// Vertical space available for lines on one page.
    pub fn content_height(&self) -> f32 {
        self.height_mm - self.top_margin_mm - self.bottom_margin_mm
    }

    /// Horizontal space available for lines.
    pub fn content_width(&self) -> f32 {
        self.width_mm - 2.0 * self.side_margin_mm
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// When a document's section is followed by a page break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentBreak {
    /// Every document after the first starts on a new page
    #[default]
    Always,
    /// A new page is started only when the next document's title and first
    /// body line do not fit in the remaining space
    WhenInsufficient,
}

/// Options for laying out lines into pages.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Maximum characters per wrapped body line
    pub max_chars: usize,

    /// Page geometry shared with the page writer
    pub page: PageGeometry,

    /// Document break policy
    pub document_break: DocumentBreak,

    /// Repeat a running header at the top of every page
    pub header: bool,

    /// Number every page in the footer
    pub footer: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum characters per line.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Set the document break policy.
    pub fn with_document_break(mut self, policy: DocumentBreak) -> Self {
        self.document_break = policy;
        self
    }

    /// Enable or disable the running header.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Enable or disable page-number footers.
    pub fn with_footer(mut self, footer: bool) -> Self {
        self.footer = footer;
        self
    }

    /// Check option values.
    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            return Err(Error::InvalidOption(
                "max_chars must be at least 1".to_string(),
            ));
        }
        if self.page.content_height() <= 0.0 || self.page.content_width() <= 0.0 {
            return Err(Error::InvalidOption(format!(
                "margins leave no room on a {}x{} mm page",
                self.page.width_mm, self.page.height_mm
            )));
        }
        Ok(())
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            page: PageGeometry::a4(),
            document_break: DocumentBreak::Always,
            header: true,
            footer: true,
        }
    }
}
