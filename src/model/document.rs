//! Source documents handed over by the OCR stage.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of text extraction for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Extraction {
    /// Text was returned (may still be whitespace-only)
    Text(String),
    /// The service returned nothing for this file
    Empty,
    /// Extraction failed with the given reason
    Failed(String),
}

impl Extraction {
    /// Classify raw extracted text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Extraction::Empty
        } else {
            Extraction::Text(text)
        }
    }
}

/// One input document of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Source identifier (file name or path)
    pub name: String,

    /// Extraction result
    pub extraction: Extraction,

    /// Position in the batch (1-indexed)
    pub ordinal: usize,
}

impl Document {
    /// Create a document from the OCR `(name, text)` contract.
    pub fn from_pair(ordinal: usize, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extraction: Extraction::from_text(text),
            ordinal,
        }
    }

    /// Create a document whose extraction failed.
    pub fn failed(ordinal: usize, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extraction: Extraction::Failed(reason.into()),
            ordinal,
        }
    }

    /// Build an ordered batch from `(name, text)` pairs.
    pub fn batch<I, N, T>(pairs: I) -> Vec<Document>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (name, text))| Document::from_pair(i + 1, name, text))
            .collect()
    }

    /// Raw extracted text, empty when extraction produced nothing.
    pub fn text(&self) -> &str {
        match &self.extraction {
            Extraction::Text(text) => text,
            Extraction::Empty | Extraction::Failed(_) => "",
        }
    }

    /// Whether extraction produced non-blank text.
    pub fn is_success(&self) -> bool {
        !self.text().trim().is_empty()
    }

    /// Base file name of the source identifier.
    pub fn display_name(&self) -> &str {
        Path::new(&self.name)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.name)
    }

    /// Character count of the raw text (Unicode scalar values).
    pub fn char_count(&self) -> usize {
        self.text().chars().count()
    }
}

/// A `(name, text)` record as stored in batch JSON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Source identifier
    pub name: String,

    /// Extracted text (empty when extraction failed)
    #[serde(default)]
    pub text: String,
}

/// Load a batch from a JSON array of `{"name": .., "text": ..}` records.
pub fn batch_from_json(json: &str) -> crate::Result<Vec<Document>> {
    let entries: Vec<BatchEntry> = serde_json::from_str(json)?;
    Ok(Document::batch(
        entries.into_iter().map(|entry| (entry.name, entry.text)),
    ))
}
