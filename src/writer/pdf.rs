//! PDF page writer backed by `printpdf`.
//!
//! Pages are built as `Vec<Op>` operation lists and serialised once in
//! [`PdfPageWriter::finish`]. Without an embedded font the built-in
//! Helvetica family is used, which covers Latin text only; right-to-left
//! output needs a TrueType font loaded with
//! [`with_font_bytes`](PdfPageWriter::with_font_bytes).

use super::PageWriter;
use crate::error::{Error, Result};
use crate::layout::PageGeometry;
use crate::model::{Emphasis, Line, Side};
use printpdf::{
    BuiltinFont, FontId, Mm, Op, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg,
    Point, Pt, TextItem,
};
use std::fs;
use std::path::Path;

/// 1pt in millimetres.
const PT_TO_MM: f32 = 0.3528;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Baseline offset inside a line cell, as a fraction of the cell height.
const BASELINE_RATIO: f32 = 0.7;

/// Writes laid-out pages into a PDF file.
pub struct PdfPageWriter {
    doc: PdfDocument,
    geometry: PageGeometry,
    font: Option<FontId>,
    pages: Vec<PdfPage>,
    current: Option<Vec<Op>>,
    cursor_mm: f32,
}

impl PdfPageWriter {
    /// Create a writer with `title` as document metadata.
    pub fn new(title: &str, geometry: PageGeometry) -> Self {
        Self {
            doc: PdfDocument::new(title),
            geometry,
            font: None,
            pages: Vec::new(),
            current: None,
            cursor_mm: geometry.top_margin_mm,
        }
    }

    /// Embed a TrueType font and use it for every line.
    pub fn with_font_bytes(mut self, bytes: &[u8]) -> Result<Self> {
        let mut warnings = Vec::new();
        let parsed = ParsedFont::from_bytes(bytes, 0, &mut warnings).ok_or_else(|| {
            Error::Font(format!(
                "could not parse font data ({} bytes, {} warnings)",
                bytes.len(),
                warnings.len()
            ))
        })?;
        self.font = Some(self.doc.add_font(&parsed));
        log::debug!("Embedded font ({} bytes)", bytes.len());
        Ok(self)
    }

    /// Check that `bytes` parse as a font this writer can embed.
    pub fn accepts_font(bytes: &[u8]) -> bool {
        let mut warnings = Vec::new();
        ParsedFont::from_bytes(bytes, 0, &mut warnings).is_some()
    }

    /// Whether a TrueType font has been embedded.
    pub fn has_embedded_font(&self) -> bool {
        self.font.is_some()
    }

    /// Number of completed pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialise the completed pages.
    pub fn to_bytes(mut self) -> Vec<u8> {
        let mut pages = std::mem::take(&mut self.pages);
        if pages.is_empty() {
            pages.push(self.blank_page(Vec::new()));
        }
        self.doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF serialised with {} warnings", warnings.len());
        }
        bytes
    }

    fn blank_page(&self, ops: Vec<Op>) -> PdfPage {
        PdfPage::new(
            Mm(self.geometry.width_mm),
            Mm(self.geometry.height_mm),
            ops,
        )
    }

    /// Horizontal start of `line` in millimetres.
    fn x_for(&self, line: &Line) -> f32 {
        let left = self.geometry.side_margin_mm;
        let width = self.geometry.content_width();
        let text_width =
            line.char_len() as f32 * AVG_GLYPH_WIDTH * line.style.font_size * PT_TO_MM;

        match line.side() {
            Side::Left => left,
            Side::Right => (left + width - text_width).max(left),
            Side::Center => (left + (width - text_width) / 2.0).max(left),
        }
    }

    fn write_at(&mut self, line: &Line, top_mm: f32) -> Result<()> {
        let x = Mm(self.x_for(line)).into_pt();
        let y = Mm(self.geometry.height_mm - top_mm - line.height * BASELINE_RATIO).into_pt();
        let size = Pt(line.style.font_size);

        let ops = self
            .current
            .as_mut()
            .ok_or_else(|| Error::Writer("line emitted outside an open page".to_string()))?;

        if line.is_blank() {
            return Ok(());
        }

        let items = vec![TextItem::Text(line.text.clone())];
        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor {
            pos: Point { x, y },
        });
        match &self.font {
            Some(font) => {
                ops.push(Op::SetFontSize {
                    size,
                    font: font.clone(),
                });
                ops.push(Op::WriteText {
                    items,
                    font: font.clone(),
                });
            }
            None => {
                ops.push(Op::SetFontSizeBuiltinFont {
                    size,
                    font: builtin(line.style.emphasis),
                });
                ops.push(Op::WriteTextBuiltinFont {
                    items,
                    font: builtin(line.style.emphasis),
                });
            }
        }
        ops.push(Op::EndTextSection);
        Ok(())
    }
}

fn builtin(emphasis: Emphasis) -> BuiltinFont {
    match emphasis {
        Emphasis::Regular => BuiltinFont::Helvetica,
        Emphasis::Bold => BuiltinFont::HelveticaBold,
        Emphasis::Italic => BuiltinFont::HelveticaOblique,
    }
}

impl PageWriter for PdfPageWriter {
    fn begin_page(&mut self, number: u32) -> Result<()> {
        if self.current.is_some() {
            return Err(Error::Writer(format!(
                "page {} begun while another page is open",
                number
            )));
        }
        self.current = Some(Vec::new());
        self.cursor_mm = self.geometry.top_margin_mm;
        Ok(())
    }

    fn emit_line(&mut self, line: &Line) -> Result<()> {
        self.write_at(line, self.cursor_mm)?;
        self.cursor_mm += line.height;
        Ok(())
    }

    fn emit_footer(&mut self, line: &Line) -> Result<()> {
        let top = self.geometry.height_mm - self.geometry.bottom_margin_mm;
        self.write_at(line, top)
    }

    fn end_page(&mut self) -> Result<()> {
        let ops = self
            .current
            .take()
            .ok_or_else(|| Error::Writer("end_page without an open page".to_string()))?;
        let page = self.blank_page(ops);
        self.pages.push(page);
        Ok(())
    }

    fn finish(self, path: &Path) -> Result<()> {
        if self.current.is_some() {
            return Err(Error::Writer(
                "finish called with a page still open".to_string(),
            ));
        }
        let pages = self.pages.len();
        let bytes = self.to_bytes();
        fs::write(path, &bytes)
            .map_err(|e| Error::Writer(format!("failed to write {}: {}", path.display(), e)))?;
        log::debug!("Wrote {} pages ({} bytes)", pages, bytes.len());
        Ok(())
    }
}
