//! Pattern rules for syntax highlighting
//!
//! This module defines the rule types a grammar is made of, and the
//! per-line state that carries an open multi-line construct from one line
//! to the next.
//!
//! Patterns may contain a capture group named `hl`. When present, only the
//! text of that group is styled and the rest of the match is treated as
//! context. This covers the cases other engines express with look-behind,
//! such as the name following `def ` or a quote that is not a transpose.

use std::ops::Range;

use regex::Regex;

use super::tokens::StyleTag;
use crate::error::PatternError;

/// Name of the capture group that narrows a match to the styled part
pub const HIGHLIGHT_GROUP: &str = "hl";

fn compile(pattern: &str) -> Result<(Regex, bool), PatternError> {
    let regex = Regex::new(pattern).map_err(|e| PatternError::new(pattern, e))?;
    let narrowed = regex.capture_names().flatten().any(|name| name == HIGHLIGHT_GROUP);
    Ok((regex, narrowed))
}

/// Byte offset of the character boundary before `pos`
fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

/// Byte offset of the character boundary after `pos`
pub(crate) fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// A single-line pattern rule
///
/// Matches anywhere within one line and assigns a style to each match.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    narrowed: bool,
    style: StyleTag,
}

impl Rule {
    /// Compile a new rule, failing on an invalid pattern
    pub fn new(pattern: &str, style: StyleTag) -> Result<Self, PatternError> {
        let (pattern, narrowed) = compile(pattern)?;
        Ok(Self {
            pattern,
            narrowed,
            style,
        })
    }

    /// The pattern source
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Style assigned to matches
    pub fn style(&self) -> StyleTag {
        self.style
    }

    /// Find the first match at or after byte offset `from`
    ///
    /// Surrounding text is still visible to assertions such as `\b`.
    pub fn find_at(&self, text: &str, from: usize) -> Option<RuleMatch> {
        if self.narrowed {
            let caps = self.pattern.captures_at(text, from)?;
            let whole = caps.get(0)?.range();
            let styled = caps
                .name(HIGHLIGHT_GROUP)
                .map_or(whole.start..whole.start, |m| m.range());
            Some(RuleMatch { whole, styled })
        } else {
            let whole = self.pattern.find_at(text, from)?.range();
            Some(RuleMatch {
                styled: whole.clone(),
                whole,
            })
        }
    }
}

/// One match of a [`Rule`], as byte ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// The whole match, context included
    pub whole: Range<usize>,
    /// The part to style
    pub styled: Range<usize>,
}

/// A multi-line construct rule (block comments, strings)
///
/// Its position in the grammar's span table is the value persisted in
/// [`LineState`] while the construct is open.
#[derive(Debug, Clone)]
pub struct SpanRule {
    start: Regex,
    start_narrowed: bool,
    end: Regex,
    style: StyleTag,
}

impl SpanRule {
    /// Compile a new span rule, failing on an invalid pattern
    pub fn new(start: &str, end: &str, style: StyleTag) -> Result<Self, PatternError> {
        let (start, start_narrowed) = compile(start)?;
        let (end, _) = compile(end)?;
        Ok(Self {
            start,
            start_narrowed,
            end,
            style,
        })
    }

    /// The start pattern source
    pub fn start_pattern(&self) -> &str {
        self.start.as_str()
    }

    /// The end pattern source
    pub fn end_pattern(&self) -> &str {
        self.end.as_str()
    }

    /// Style of the whole construct, delimiters included
    pub fn style(&self) -> StyleTag {
        self.style
    }

    /// Find the first non-empty opening at or after `at`
    ///
    /// Returns the byte range of the opening delimiter. A narrowed pattern
    /// may use one character before `at` as context.
    pub fn find_start(&self, text: &str, at: usize) -> Option<Range<usize>> {
        let mut from = if self.start_narrowed {
            prev_boundary(text, at)
        } else {
            at
        };

        while from <= text.len() {
            let (match_start, range) = if self.start_narrowed {
                let caps = self.start.captures_at(text, from)?;
                let whole = caps.get(0)?;
                (whole.start(), caps.name(HIGHLIGHT_GROUP).map(|m| m.range()))
            } else {
                let m = self.start.find_at(text, from)?;
                (m.start(), Some(m.range()))
            };

            match range {
                Some(range) if range.start >= at && !range.is_empty() => return Some(range),
                _ => from = next_boundary(text, match_start),
            }
        }
        None
    }

    /// Find the first closing at or after `at`, returning its byte range
    ///
    /// No closing starts between `at` and the returned start, so a caller
    /// retrying at every offset would land on the same match.
    pub fn find_end(&self, text: &str, at: usize) -> Option<Range<usize>> {
        self.end.find_at(text, at).map(|m| m.range())
    }
}

/// Line state for tracking multi-line constructs
///
/// Persisted per line as a single integer: `-1` outside any construct, or
/// the index of the open [`SpanRule`]. Nested constructs would need a small
/// stack of indices here instead; no built-in grammar requires them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineState(i32);

impl LineState {
    /// Not inside any multi-line construct
    pub const NORMAL: LineState = LineState(-1);

    /// Create state for being inside span rule `index`
    pub fn inside(index: usize) -> Self {
        Self(i32::try_from(index).unwrap_or(i32::MAX))
    }

    /// Restore a persisted value; anything negative means normal
    pub fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            Self::NORMAL
        } else {
            Self(raw)
        }
    }

    /// The persisted integer
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Index of the open span rule, if any
    pub fn span_index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Check if we're inside a multi-line construct
    pub fn is_inside_span(self) -> bool {
        self.0 >= 0
    }

    /// Check if we're in normal (no multi-line) state
    pub fn is_normal(self) -> bool {
        self.0 < 0
    }
}

impl Default for LineState {
    fn default() -> Self {
        Self::NORMAL
    }
}
