//! Incremental highlighting engine
//!
//! The engine owns a document's lines together with the per-line state
//! and span caches. Every edit re-tokenizes the first affected line and
//! keeps going only while a line's end state differs from what was cached
//! for it, so a keystroke that doesn't open or close a construct costs a
//! single line.
//!
//! Every mutating call returns the range of lines whose spans were
//! recomputed; that is the repaint notification for the presentation
//! layer.

use std::ops::Range;

use super::grammar::Grammar;
use super::rules::LineState;
use super::style::StyledSpan;
use super::tokenizer::LineTokens;
use crate::error::{HighlightError, Result};

/// One line of the document with its cached highlighting
#[derive(Debug, Clone)]
struct LineRecord {
    text: String,
    end_state: LineState,
    spans: Vec<StyledSpan>,
}

impl LineRecord {
    fn new(text: String) -> Self {
        Self {
            text,
            end_state: LineState::NORMAL,
            spans: Vec::new(),
        }
    }
}

/// Per-document highlighter
#[derive(Debug, Clone)]
pub struct HighlightEngine {
    grammar: Option<Grammar>,
    lines: Vec<LineRecord>,
}

impl HighlightEngine {
    /// Create an engine for an empty document without a grammar
    pub fn new() -> Self {
        Self {
            grammar: None,
            // A document always has at least one line
            lines: vec![LineRecord::new(String::new())],
        }
    }

    /// Create an engine for an empty document using `grammar`
    pub fn with_grammar(grammar: Grammar) -> Self {
        let mut engine = Self::new();
        engine.set_grammar(grammar);
        engine
    }

    /// The active grammar, if any
    pub fn grammar(&self) -> Option<&Grammar> {
        self.grammar.as_ref()
    }

    /// Swap the active grammar and re-highlight the whole document
    pub fn set_grammar(&mut self, grammar: Grammar) -> Range<usize> {
        tracing::debug!(grammar = grammar.name(), "setting grammar");
        self.grammar = Some(grammar);
        self.relex(0, self.lines.len())
    }

    /// Detach the grammar; every line loses its styling
    pub fn clear_grammar(&mut self) -> Range<usize> {
        self.grammar = None;
        self.relex(0, self.lines.len())
    }

    /// Replace the whole document
    pub fn set_text(&mut self, text: &str) -> Range<usize> {
        self.lines = split_lines(text).map(LineRecord::new).collect();
        self.relex(0, self.lines.len())
    }

    /// Number of lines, never zero
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a line without its line ending
    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|record| record.text.as_str())
    }

    /// Cached spans of a line; empty for lines out of range
    pub fn spans(&self, line: usize) -> &[StyledSpan] {
        self.lines
            .get(line)
            .map(|record| record.spans.as_slice())
            .unwrap_or_default()
    }

    /// Cached end state of a line
    pub fn line_state(&self, line: usize) -> Option<LineState> {
        self.lines.get(line).map(|record| record.end_state)
    }

    /// Replace the text of one line and re-highlight as far as needed
    pub fn on_line_changed(&mut self, line: usize, text: impl Into<String>) -> Result<Range<usize>> {
        self.check_line(line, self.lines.len())?;
        self.lines[line].text = text.into();
        Ok(self.relex(line, line + 1))
    }

    /// Insert lines before line `at` (`at == line_count()` appends)
    pub fn insert_lines<I, S>(&mut self, at: usize, lines: I) -> Result<Range<usize>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.check_line(at, self.lines.len() + 1)?;
        let before = self.lines.len();
        self.lines.splice(
            at..at,
            lines.into_iter().map(|text| LineRecord::new(text.into())),
        );
        let inserted = self.lines.len() - before;
        if inserted == 0 {
            return Ok(at..at);
        }
        // The line displaced by the insertion has a new predecessor too
        Ok(self.relex(at, at + inserted + 1))
    }

    /// Remove a range of lines; the document keeps at least one line
    pub fn remove_lines(&mut self, range: Range<usize>) -> Result<Range<usize>> {
        let count = self.lines.len();
        if range.start > range.end || range.end > count {
            return Err(HighlightError::LineOutOfRange {
                line: range.end,
                count,
            });
        }
        self.lines.drain(range.clone());
        if self.lines.is_empty() {
            self.lines.push(LineRecord::new(String::new()));
            return Ok(self.relex(0, 1));
        }
        if range.is_empty() {
            return Ok(range.start..range.start);
        }
        // The line now at `range.start` has a new predecessor
        Ok(self.relex(range.start, range.start))
    }

    fn check_line(&self, line: usize, limit: usize) -> Result<()> {
        if line < limit {
            Ok(())
        } else {
            Err(HighlightError::LineOutOfRange {
                line,
                count: self.lines.len(),
            })
        }
    }

    /// Re-tokenize from `from`, always covering lines before `force_until`,
    /// then stopping at the first line whose end state is unchanged
    fn relex(&mut self, from: usize, force_until: usize) -> Range<usize> {
        let mut state = from
            .checked_sub(1)
            .and_then(|prev| self.line_state(prev))
            .unwrap_or(LineState::NORMAL);

        let mut line = from;
        while line < self.lines.len() {
            let tokens = match &self.grammar {
                Some(grammar) => grammar.tokenize_line(&self.lines[line].text, state),
                None => LineTokens {
                    spans: Vec::new(),
                    end_state: LineState::NORMAL,
                },
            };
            tracing::trace!(line, state = tokens.end_state.raw(), "relexed line");

            let record = &mut self.lines[line];
            let settled = record.end_state == tokens.end_state;
            record.end_state = tokens.end_state;
            record.spans = tokens.spans;
            state = record.end_state;
            line += 1;

            if settled && line >= force_until {
                break;
            }
        }

        tracing::debug!(from, to = line, "re-highlighted lines");
        from..line
    }
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text into lines, keeping a trailing empty line after a final
/// newline and dropping `\r` of CRLF endings
fn split_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
}
