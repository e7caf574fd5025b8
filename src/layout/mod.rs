//! Line wrapping and pagination.
//!
//! [`wrap`] turns a block of text into bounded display lines; the
//! [`LayoutEngine`] groups lines into [`PageBlock`](crate::model::PageBlock)s,
//! breaking pages on overflow and where a [`Section`] asks for it.

mod engine;
mod options;
mod wrap;

pub use engine::{layout, LayoutEngine, Section};
pub use options::{DocumentBreak, LayoutOptions, PageGeometry, DEFAULT_MAX_CHARS};
pub use wrap::wrap;
