//! Error types for the highlighting engine

use thiserror::Error;

/// Result type alias for highlighting operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// A grammar pattern that failed to compile
#[derive(Error, Debug)]
#[error("invalid pattern `{pattern}`: {source}")]
pub struct PatternError {
    /// The offending pattern source
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            source,
        }
    }
}

/// Highlighter error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unsupported theme: {0}")]
    UnknownTheme(String),

    #[error("Line {line} out of range ({count} lines)")]
    LineOutOfRange { line: usize, count: usize },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Tab spacing must be a positive integer, got {0}")]
    InvalidTabSpacing(usize),

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
