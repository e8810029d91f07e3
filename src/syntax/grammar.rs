//! Grammar definitions for syntax highlighting
//!
//! A [`Grammar`] is plain data: the ordered single-line rules, the ordered
//! multi-line span rules and an optional whitespace style for one language.

use super::rules::{Rule, SpanRule};
use super::tokens::StyleTag;
use crate::error::PatternError;

/// The complete rule set of one language
#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    rules: Vec<Rule>,
    span_rules: Vec<SpanRule>,
    whitespace: Option<StyleTag>,
}

impl Grammar {
    /// Create a new empty grammar
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: Vec::new(),
            span_rules: Vec::new(),
            whitespace: None,
        }
    }

    /// Grammar name (e.g. "Python", "SPICE")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a single-line rule
    ///
    /// Earlier rules win when two rules match at the same offset.
    pub fn add_rule(&mut self, pattern: &str, style: StyleTag) -> Result<(), PatternError> {
        self.rules.push(Rule::new(pattern, style)?);
        Ok(())
    }

    /// Append a multi-line span rule and return its index
    ///
    /// The index is the value carried in `LineState` while the span is open.
    pub fn add_span_rule(
        &mut self,
        start: &str,
        end: &str,
        style: StyleTag,
    ) -> Result<usize, PatternError> {
        self.span_rules.push(SpanRule::new(start, end, style)?);
        Ok(self.span_rules.len() - 1)
    }

    /// Style runs of spaces and tabs left unstyled by every other rule
    pub fn set_whitespace_style(&mut self, style: Option<StyleTag>) {
        self.whitespace = style;
    }

    /// Empty both rule tables and drop the whitespace style
    pub fn clear(&mut self) {
        self.rules.clear();
        self.span_rules.clear();
        self.whitespace = None;
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn span_rules(&self) -> &[SpanRule] {
        &self.span_rules
    }

    pub fn span_rule(&self, index: usize) -> Option<&SpanRule> {
        self.span_rules.get(index)
    }

    pub fn whitespace_style(&self) -> Option<StyleTag> {
        self.whitespace
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn span_rule_count(&self) -> usize {
        self.span_rules.len()
    }

    /// Check if the grammar has no rules at all
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.span_rules.is_empty() && self.whitespace.is_none()
    }
}
