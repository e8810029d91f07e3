//! Syntax highlighting
//!
//! This module provides the highlighting engine:
//! - Grammars: ordered single-line and multi-line rules per language
//! - A per-line tokenizer carrying open strings/comments across lines
//! - An incremental engine that re-highlights only what an edit affects
//! - Themes resolving style tags to colors

mod builtin;
mod engine;
mod grammar;
mod language;
mod registry;
mod rules;
mod style;
mod theme;
mod tokenizer;
mod tokens;

pub use builtin::GrammarBuilder;
pub use engine::HighlightEngine;
pub use grammar::Grammar;
pub use language::{Language, LanguageSelector};
pub use registry::GrammarRegistry;
pub use rules::{LineState, Rule, RuleMatch, SpanRule, HIGHLIGHT_GROUP};
pub use style::{Color, Style, StyledSpan};
pub use theme::{Theme, ThemeKind};
pub use tokenizer::LineTokens;
pub use tokens::{StyleTag, StyleTagResolver, TokenClass};
