//! Right-to-left shaping: contextual joining followed by bidi reordering.
//!
//! Shaping turns logically ordered Persian/Arabic text into a string that
//! renders correctly when emitted glyph by glyph from left to right:
//!
//! 1. the text is normalized to NFC,
//! 2. letters are replaced by their contextual presentation forms,
//! 3. each line is reordered into visual order.
//!
//! Shaping is a pure function of the input and the enabled flag. It is not
//! idempotent: shape raw text exactly once.
//!
//! # Example
//!
//! ```
//! use ocrpdf::shape::{shape, shape_outcome, ShapeOutcome};
//!
//! assert_eq!(shape("Hello", false), "Hello");
//! assert!(matches!(shape_outcome("سلام", true), ShapeOutcome::Shaped(_)));
//! ```

mod bidi;
mod joining;

use std::panic;
use unicode_normalization::UnicodeNormalization;

/// Result of a shaping attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeOutcome {
    /// Shaping was disabled or the input was blank
    Unchanged(String),
    /// Text was reshaped and reordered
    Shaped(String),
    /// Shaping failed internally; carries the original text
    Degraded(String),
}

impl ShapeOutcome {
    /// Text to lay out, whatever the outcome.
    pub fn into_text(self) -> String {
        match self {
            ShapeOutcome::Unchanged(text)
            | ShapeOutcome::Shaped(text)
            | ShapeOutcome::Degraded(text) => text,
        }
    }

    /// Borrow the text to lay out.
    pub fn text(&self) -> &str {
        match self {
            ShapeOutcome::Unchanged(text)
            | ShapeOutcome::Shaped(text)
            | ShapeOutcome::Degraded(text) => text,
        }
    }

    /// Check if shaping failed and fell back to the input.
    pub fn is_degraded(&self) -> bool {
        matches!(self, ShapeOutcome::Degraded(_))
    }
}

/// Shape `text` for visual left-to-right emission.
///
/// Returns `text` unchanged when `enabled` is false, and an empty string for
/// blank input when enabled. Never fails: internal errors degrade to the
/// original text.
pub fn shape(text: &str, enabled: bool) -> String {
    shape_outcome(text, enabled).into_text()
}

/// Shape `text` and report how it went.
pub fn shape_outcome(text: &str, enabled: bool) -> ShapeOutcome {
    shape_outcome_with(text, enabled, shape_lines)
}

/// [`shape_outcome`] with the shaping pass supplied by the caller.
///
/// A panic inside `shaper` yields [`ShapeOutcome::Degraded`] carrying `text`.
pub(crate) fn shape_outcome_with<F>(text: &str, enabled: bool, shaper: F) -> ShapeOutcome
where
    F: FnOnce(&str) -> String + panic::UnwindSafe,
{
    if !enabled {
        return ShapeOutcome::Unchanged(text.to_string());
    }
    if text.trim().is_empty() {
        return ShapeOutcome::Unchanged(String::new());
    }

    match panic::catch_unwind(|| shaper(text)) {
        Ok(shaped) => ShapeOutcome::Shaped(shaped),
        Err(cause) => {
            let reason = cause
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| cause.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown failure".to_string());
            log::warn!("Text shaping failed, using unshaped text: {}", reason);
            ShapeOutcome::Degraded(text.to_string())
        }
    }
}

/// Shape line by line so paragraph boundaries survive reordering.
pub(crate) fn shape_lines(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    normalized
        .split('\n')
        .map(|line| bidi::visual_line(&joining::reshape(line.trim_end_matches('\r'))))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_identity() {
        for text in ["", "  ", "Hello world", "سلام دنیا", "a\n\nb"] {
            assert_eq!(shape(text, false), text);
        }
    }

    #[test]
    fn test_blank_input_enabled() {
        assert_eq!(
            shape_outcome("   \n ", true),
            ShapeOutcome::Unchanged(String::new())
        );
    }

    #[test]
    fn test_latin_text_survives_shaping() {
        assert_eq!(shape("Page 3 of 10", true), "Page 3 of 10");
    }

    #[test]
    fn test_persian_word_is_joined_and_reversed() {
        // سلام: seen lam alef meem
        let shaped = shape("\u{0633}\u{0644}\u{0627}\u{0645}", true);
        // visual order: meem (isolated), lam-alef (final), seen (initial)
        assert_eq!(shaped, "\u{FEE1}\u{FEFC}\u{FEB3}");
    }

    #[test]
    fn test_lines_are_shaped_independently() {
        let shaped = shape("\u{0628}\u{062A}\nabc\r\n\u{0628}", true);
        let lines: Vec<&str> = shaped.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\u{FE96}\u{FE91}");
        assert_eq!(lines[1], "abc");
        assert_eq!(lines[2], "\u{FE8F}");
    }

    #[test]
    fn test_shaping_is_deterministic() {
        let text = "فایل ۱: گزارش (نهایی) 2024";
        assert_eq!(shape(text, true), shape(text, true));
    }

    #[test]
    fn test_panicking_shaper_degrades_to_input() {
        let outcome = shape_outcome_with("سلام", true, |_| panic!("missing glyph table"));
        assert_eq!(outcome, ShapeOutcome::Degraded("سلام".to_string()));
    }

    #[test]
    fn test_shaper_skipped_when_disabled_or_blank() {
        let never = |_: &str| -> String { unreachable!() };
        assert_eq!(
            shape_outcome_with("abc", false, never),
            ShapeOutcome::Unchanged("abc".to_string())
        );
        assert_eq!(
            shape_outcome_with(" ", true, never),
            ShapeOutcome::Unchanged(String::new())
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let outcome = ShapeOutcome::Degraded("raw".to_string());
        assert!(outcome.is_degraded());
        assert_eq!(outcome.text(), "raw");
        assert_eq!(outcome.into_text(), "raw");
    }
}
