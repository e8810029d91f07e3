//! ngspicer-highlight - syntax highlighting for netlists and scripts
//!
//! Line-oriented, regex-driven highlighting with state carried between
//! lines for strings and comments that span several of them.

pub mod config;
pub mod error;
pub mod indent;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use error::{HighlightError, PatternError, Result};
pub use indent::{newline_indent, TabSettings, TabStyle};
pub use syntax::{
    Grammar, GrammarRegistry, HighlightEngine, Language, LanguageSelector, LineState, StyleTag,
    StyledSpan, Theme, ThemeKind, TokenClass,
};
