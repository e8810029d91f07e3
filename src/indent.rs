//! Indentation helpers
//!
//! Computes what the Tab, Backspace and Return keys should do in a code
//! view. The prefix passed in is the text of the line before the cursor.

use std::fmt;

use crate::error::{HighlightError, Result};

/// Largest accepted tab spacing
pub const MAX_TAB_SPACING: usize = 16;

/// Whether Tab inserts a tab character or spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabStyle {
    #[default]
    Soft,
    Hard,
}

impl TabStyle {
    pub fn name(self) -> &'static str {
        match self {
            TabStyle::Soft => "Soft",
            TabStyle::Hard => "Hard",
        }
    }

    /// Parse a style name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "soft" => Some(TabStyle::Soft),
            "hard" => Some(TabStyle::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for TabStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tab handling for a code view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSettings {
    style: TabStyle,
    spacing: usize,
}

impl TabSettings {
    pub fn new(style: TabStyle, spacing: usize) -> Result<Self> {
        if spacing == 0 {
            return Err(HighlightError::InvalidTabSpacing(spacing));
        }
        Ok(Self { style, spacing })
    }

    pub fn style(&self) -> TabStyle {
        self.style
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Display width of `prefix`, counting a tab as `spacing` columns
    fn width(&self, prefix: &str) -> usize {
        prefix
            .chars()
            .map(|c| if c == '\t' { self.spacing } else { 1 })
            .sum()
    }

    /// Text to insert when Tab is pressed after `prefix`
    pub fn tab_insertion(&self, prefix: &str) -> String {
        match self.style {
            TabStyle::Hard => "\t".to_string(),
            TabStyle::Soft => {
                let count = self.spacing - self.width(prefix) % self.spacing;
                " ".repeat(count)
            }
        }
    }

    /// Number of characters Backspace removes after `prefix`
    ///
    /// Inside space indentation this goes back to the previous tab stop,
    /// never past the start of the line.
    pub fn backspace_count(&self, prefix: &str, has_selection: bool) -> usize {
        let in_indent = !prefix.is_empty() && prefix.chars().all(char::is_whitespace);
        if has_selection || !in_indent || !prefix.ends_with(' ') {
            return 1;
        }
        let count = (self.width(prefix) + self.spacing - 1) % self.spacing + 1;
        count.min(prefix.chars().count())
    }
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            style: TabStyle::Soft,
            spacing: 4,
        }
    }
}

/// Indentation to carry onto a new line split from `line`
pub fn newline_indent(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    &line[..end]
}
