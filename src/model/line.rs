//! Display lines and their per-line styling.

use serde::{Deserialize, Serialize};

/// Logical alignment of a line.
///
/// `Leading` and `Trailing` are relative to the reading direction of the
/// line; they are resolved to a physical [`Side`] by [`Line::side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Start of the reading direction (left for LTR, right for RTL)
    #[default]
    Leading,
    /// End of the reading direction
    Trailing,
    /// Horizontally centred
    Center,
}

/// Reading direction of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left-to-right (Latin scripts)
    #[default]
    Ltr,
    /// Right-to-left (Arabic-family scripts)
    Rtl,
}

/// Physical placement of a line on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Flush against the left margin
    Left,
    /// Flush against the right margin
    Right,
    /// Centred between the margins
    Center,
}

/// Font emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Regular weight
    #[default]
    Regular,
    /// Bold weight
    Bold,
    /// Italic / oblique
    Italic,
}

/// Text styling carried by every line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f32,

    /// Font emphasis
    pub emphasis: Emphasis,
}

impl TextStyle {
    /// Create a regular style at the given size.
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            emphasis: Emphasis::Regular,
        }
    }

    /// Bold style at the given size.
    pub fn bold(font_size: f32) -> Self {
        Self {
            font_size,
            emphasis: Emphasis::Bold,
        }
    }

    /// Italic style at the given size.
    pub fn italic(font_size: f32) -> Self {
        Self {
            font_size,
            emphasis: Emphasis::Italic,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Default cell height of a body line, in millimetres.
pub const DEFAULT_LINE_HEIGHT: f32 = 8.0;

/// A single display line.
///
/// A line with empty text is a paragraph break (or vertical spacer); it still
/// occupies `height` on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Text in visual order
    pub text: String,

    /// Alignment hint
    pub align: Alignment,

    /// Reading direction used to resolve the alignment
    pub direction: Direction,

    /// Font styling
    pub style: TextStyle,

    /// Vertical space the line occupies, in millimetres
    pub height: f32,
}

impl Line {
    /// Create a leading-aligned body line.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Alignment::Leading,
            direction: Direction::Ltr,
            style: TextStyle::default(),
            height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Create an empty line representing a paragraph break.
    pub fn blank() -> Self {
        Self::new(String::new())
    }

    /// Create an empty line occupying exactly `height` millimetres.
    pub fn spacer(height: f32) -> Self {
        Self::blank().with_height(height)
    }

    /// Set the alignment.
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the reading direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the text style.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the occupied height.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Check if this line carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Resolve the alignment hint to a physical side.
    pub fn side(&self) -> Side {
        match (self.align, self.direction) {
            (Alignment::Center, _) => Side::Center,
            (Alignment::Leading, Direction::Ltr) | (Alignment::Trailing, Direction::Rtl) => {
                Side::Left
            }
            (Alignment::Leading, Direction::Rtl) | (Alignment::Trailing, Direction::Ltr) => {
                Side::Right
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_defaults() {
        let line = Line::new("Hello");
        assert_eq!(line.char_len(), 5);
        assert_eq!(line.height, DEFAULT_LINE_HEIGHT);
        assert_eq!(line.side(), Side::Left);
        assert!(!line.is_blank());
    }

    #[test]
    fn test_spacer_is_blank() {
        let spacer = Line::spacer(4.0);
        assert!(spacer.is_blank());
        assert_eq!(spacer.height, 4.0);
    }

    #[test]
    fn test_side_resolution() {
        let rtl = Line::new("x").with_direction(Direction::Rtl);
        assert_eq!(rtl.side(), Side::Right);
        assert_eq!(rtl.clone().with_align(Alignment::Trailing).side(), Side::Left);
        assert_eq!(rtl.with_align(Alignment::Center).side(), Side::Center);
        assert_eq!(
            Line::new("x").with_align(Alignment::Trailing).side(),
            Side::Right
        );
    }

    #[test]
    fn test_char_len_counts_scalars() {
        // Persian text is multi-byte in UTF-8
        let line = Line::new("سلام");
        assert_eq!(line.char_len(), 4);
        assert!(line.text.len() > 4);
    }
}
