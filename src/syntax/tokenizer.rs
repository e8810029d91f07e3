//! Per-line tokenizer
//!
//! Turns one line of text plus the [`LineState`] carried from the previous
//! line into styled spans and the state for the next line. Three passes run
//! over a per-line canvas, each painting only positions no earlier pass
//! claimed:
//!
//! 1. multi-line spans (strings, block comments), a two-state machine
//!    driven by a cursor;
//! 2. single-line rules in table order, each painting its non-overlapping
//!    matches (a match whose start is already claimed is skipped, and the
//!    search resumes after it);
//! 3. whitespace, if the grammar styles it.

use std::ops::Range;

use super::grammar::Grammar;
use super::rules::{next_boundary, LineState, SpanRule};
use super::style::StyledSpan;
use super::tokens::StyleTag;

/// Result of tokenizing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens {
    /// Styled runs in ascending order, character offsets
    pub spans: Vec<StyledSpan>,
    /// State at end of line (for next line)
    pub end_state: LineState,
}

/// Per-byte style assignments for one line
struct Canvas {
    cells: Vec<Option<StyleTag>>,
}

impl Canvas {
    fn new(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    fn is_styled(&self, pos: usize) -> bool {
        self.cells.get(pos).is_some_and(|cell| cell.is_some())
    }

    /// Paint every still-unstyled byte in `range`
    fn paint(&mut self, range: Range<usize>, style: StyleTag) {
        let end = range.end.min(self.cells.len());
        for cell in &mut self.cells[range.start.min(end)..end] {
            cell.get_or_insert(style);
        }
    }

    /// Collapse to maximal runs of equal style, in character offsets
    fn into_spans(self, text: &str) -> Vec<StyledSpan> {
        let mut spans: Vec<StyledSpan> = Vec::new();
        for (char_idx, (byte_idx, _)) in text.char_indices().enumerate() {
            let Some(style) = self.cells[byte_idx] else {
                continue;
            };
            match spans.last_mut() {
                Some(last) if last.style == style && last.end() == char_idx => last.length += 1,
                _ => spans.push(StyledSpan::new(char_idx, 1, style)),
            }
        }
        spans
    }
}

/// Cached result of searching one span rule's opening
///
/// The cursor only moves forward, so a found opening stays valid until the
/// cursor passes it, and "no opening" stays valid for the rest of the line.
#[derive(Clone)]
enum NextStart {
    Unsearched,
    Found(Range<usize>),
    Exhausted,
}

impl NextStart {
    fn resolve(&mut self, rule: &SpanRule, text: &str, cursor: usize) -> Option<&Range<usize>> {
        let stale = match self {
            NextStart::Unsearched => true,
            NextStart::Found(range) => range.start < cursor,
            NextStart::Exhausted => false,
        };
        if stale {
            *self = match rule.find_start(text, cursor) {
                Some(range) => NextStart::Found(range),
                None => NextStart::Exhausted,
            };
        }
        match &*self {
            NextStart::Found(range) => Some(range),
            _ => None,
        }
    }
}

impl Grammar {
    /// Tokenize a single line
    ///
    /// Takes the line text and the state from the previous line. Returns
    /// spans and the state for the next line. Pure: the same inputs always
    /// give the same output.
    pub fn tokenize_line(&self, text: &str, prev_state: LineState) -> LineTokens {
        let mut canvas = Canvas::new(text.len());

        let end_state = self.paint_spans(text, prev_state, &mut canvas);

        for rule in self.rules() {
            let mut from = 0;
            while from <= text.len() {
                let Some(found) = rule.find_at(text, from) else {
                    break;
                };
                // Matches never overlap; one whose start an earlier span or
                // rule owns is dropped whole
                if !found.styled.is_empty() && !canvas.is_styled(found.styled.start) {
                    canvas.paint(found.styled, rule.style());
                }
                from = if found.whole.is_empty() {
                    next_boundary(text, found.whole.start)
                } else {
                    found.whole.end
                };
            }
        }

        if let Some(style) = self.whitespace_style() {
            for (pos, ch) in text.char_indices() {
                if ch == ' ' || ch == '\t' {
                    canvas.paint(pos..pos + 1, style);
                }
            }
        }

        LineTokens {
            spans: canvas.into_spans(text),
            end_state,
        }
    }

    /// Run the multi-line state machine over one line
    fn paint_spans(&self, text: &str, prev_state: LineState, canvas: &mut Canvas) -> LineState {
        let rules = self.span_rules();
        if rules.is_empty() {
            return LineState::NORMAL;
        }

        // A state from another grammar means nothing here
        let mut open = prev_state.span_index().filter(|&k| k < rules.len());
        let mut start_index = 0;
        let mut cursor = 0;
        let mut next_starts = vec![NextStart::Unsearched; rules.len()];

        while cursor < text.len() {
            match open {
                None => {
                    // Earliest opening wins, then the lowest rule index
                    let mut best: Option<(usize, Range<usize>)> = None;
                    for (k, rule) in rules.iter().enumerate() {
                        if let Some(range) = next_starts[k].resolve(rule, text, cursor) {
                            if best.as_ref().map_or(true, |(_, b)| range.start < b.start) {
                                best = Some((k, range.clone()));
                            }
                        }
                    }

                    match best {
                        Some((k, range)) => {
                            start_index = range.start;
                            cursor = range.end;
                            open = Some(k);
                        }
                        None => cursor = text.len(),
                    }
                }
                Some(k) => {
                    let rule = &rules[k];
                    match rule.find_end(text, cursor) {
                        Some(range) => {
                            cursor = range.end;
                            canvas.paint(start_index..cursor, rule.style());
                            open = None;
                        }
                        None => break,
                    }
                }
            }
        }

        match open {
            Some(k) => {
                canvas.paint(start_index..text.len(), rules[k].style());
                LineState::inside(k)
            }
            None => LineState::NORMAL,
        }
    }
}
