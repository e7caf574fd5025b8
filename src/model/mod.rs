//! Report model types.
//!
//! This module defines the intermediate representation that sits between the
//! OCR stage and the page writer: input documents, styled display lines,
//! committed page blocks and the assembled report.

mod document;
mod line;
mod page;
mod report;

pub use document::{batch_from_json, BatchEntry, Document, Extraction};
pub use line::{Alignment, Direction, Emphasis, Line, Side, TextStyle, DEFAULT_LINE_HEIGHT};
pub use page::{BreakReason, PageBlock};
pub use report::{EntryStatus, JsonFormat, Report, ReportEntry, Summary};
