//! Report options and configuration.

use crate::layout::{DocumentBreak, LayoutOptions};
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Default directory the report is written into.
pub const DEFAULT_OUTPUT_DIR: &str = "extracted_texts";

/// Default report file name.
pub const DEFAULT_FILE_NAME: &str = "ocr_results.pdf";

/// Options for assembling and saving a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Layout configuration
    pub layout: LayoutOptions,

    /// Reshape and reorder text for right-to-left display.
    ///
    /// Also selects the Persian label set.
    pub shaping: bool,

    /// Timestamp shown in the report title (now, when unset)
    pub generated_at: Option<NaiveDateTime>,

    /// Directory the report is saved into
    pub output_dir: PathBuf,

    /// File name of the saved report
    pub file_name: String,
}

impl ReportOptions {
    /// Create new report options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout options.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Enable or disable right-to-left shaping.
    pub fn with_shaping(mut self, enabled: bool) -> Self {
        self.shaping = enabled;
        self
    }

    /// Set the maximum characters per wrapped line.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.layout = self.layout.with_max_chars(max_chars);
        self
    }

    /// Set the document break policy.
    pub fn with_document_break(mut self, policy: DocumentBreak) -> Self {
        self.layout = self.layout.with_document_break(policy);
        self
    }

    /// Fix the timestamp shown in the title.
    pub fn with_timestamp(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the output file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Full path of the saved report.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            shaping: false,
            generated_at: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}
