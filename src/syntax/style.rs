//! Style types for text rendering
//!
//! Concrete presentation attributes live here. The tokenizer never sees
//! them: it works with opaque [`StyleTag`]s that a theme resolves to a
//! [`Style`] when a renderer paints a line.

use crate::error::{HighlightError, Result};

use super::tokens::StyleTag;

/// Text color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Whatever the terminal or widget uses
    #[default]
    Default,
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a `#rrggbb` color
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || HighlightError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// How one token class is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub italic: bool,
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            italic: false,
        }
    }

    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Nothing to draw differently from plain text
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A styled run of characters within one line
///
/// Offsets are zero-based character (not byte) offsets into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledSpan {
    /// First character covered
    pub start: usize,
    /// Number of characters covered
    pub length: usize,
    /// Opaque style, resolved by the theme
    pub style: StyleTag,
}

impl StyledSpan {
    /// Create a new span
    pub fn new(start: usize, length: usize, style: StyleTag) -> Self {
        Self { start, length, style }
    }

    /// One past the last character covered
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Check if this span contains a character position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(!style.italic);
    }

    #[test]
    fn test_style_builders() {
        let red = Color::Rgb(0xcc, 0, 0);
        let style = Style::fg(red).with_italic();
        assert_eq!(style.fg, red);
        assert!(style.italic);
        assert!(!style.is_default());
        assert_eq!(style.with_fg(Color::Default).fg, Color::Default);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#99ad6a").unwrap(), Color::Rgb(0x99, 0xad, 0x6a));
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::Rgb(255, 255, 255));
        assert!(Color::from_hex("99ad6a").is_err());
        assert!(Color::from_hex("#99ad6").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_span_contains() {
        let span = StyledSpan::new(5, 5, StyleTag::new(0));
        assert_eq!(span.end(), 10);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }
}
