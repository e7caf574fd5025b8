//! OCR service response parsing.
//!
//! The service answers a document upload with JSON of the shape
//! `{"pages": [{"text": "..."} | {"parts": [{"type": "text", "text": "..."}]}]}`.
//! Pages carrying `text` are emitted under a `--- Page N ---` marker;
//! otherwise the page's text parts are concatenated line by line.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Top-level OCR response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrResponse {
    /// Recognised pages in document order
    #[serde(default)]
    pub pages: Vec<OcrPage>,
}

/// One recognised page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrPage {
    /// Full page text, when the service returns it directly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Page fragments, used when `text` is absent
    #[serde(default)]
    pub parts: Vec<OcrPart>,
}

/// A fragment of a recognised page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrPart {
    /// Fragment kind; only `"text"` parts contribute
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Fragment text; missing on non-text parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl OcrResponse {
    /// Parse a response body.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::OcrResponse(e.to_string()))
    }

    /// Flatten the response into the extracted text of the document.
    ///
    /// The result is trimmed; a response with no usable text yields an
    /// empty string.
    pub fn extracted_text(&self) -> String {
        let mut out = String::new();
        for (index, page) in self.pages.iter().enumerate() {
            match &page.text {
                Some(text) => {
                    out.push_str(&format!("--- Page {} ---\n{}\n\n", index + 1, text));
                }
                None => {
                    for part in page.parts.iter().filter(|p| p.kind == "text") {
                        if let Some(text) = &part.text {
                            out.push_str(text);
                            out.push('\n');
                        }
                    }
                }
            }
        }
        out.trim().to_string()
    }
}

/// Parse a response body straight to extracted text.
pub fn parse_response(json: &str) -> Result<String> {
    Ok(OcrResponse::from_json(json)?.extracted_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_markers() {
        let json = r#"{"pages": [{"text": "first"}, {"text": "second"}]}"#;
        assert_eq!(
            parse_response(json).unwrap(),
            "--- Page 1 ---\nfirst\n\n--- Page 2 ---\nsecond"
        );
    }

    #[test]
    fn test_parts_fallback() {
        let json = r#"{"pages": [{"parts": [
            {"type": "text", "text": "line one"},
            {"type": "image"},
            {"type": "text", "text": "line two"}
        ]}]}"#;
        assert_eq!(parse_response(json).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_page_numbering_counts_part_pages() {
        let json = r#"{"pages": [{"parts": [{"type": "text", "text": "a"}]}, {"text": "b"}]}"#;
        assert_eq!(parse_response(json).unwrap(), "a\n--- Page 2 ---\nb");
    }

    #[test]
    fn test_missing_pages_is_empty() {
        assert_eq!(parse_response("{}").unwrap(), "");
        assert_eq!(parse_response(r#"{"pages": []}"#).unwrap(), "");
    }

    #[test]
    fn test_malformed_response() {
        let result = parse_response("<html>502</html>");
        assert!(matches!(result, Err(Error::OcrResponse(_))));
    }
}
