//! Language detection
//!
//! Maps file names and user-facing names to the supported languages.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{HighlightError, Result};

/// Languages with a built-in grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    PlainText,
    Python,
    C,
    MatlabOctave,
    Spice,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::PlainText,
        Language::Python,
        Language::C,
        Language::MatlabOctave,
        Language::Spice,
    ];

    /// Display name, as shown in the language menu
    pub fn name(&self) -> &'static str {
        match self {
            Language::PlainText => "Plain Text",
            Language::Python => "Python",
            Language::C => "C/C++",
            Language::MatlabOctave => "Matlab/Octave",
            Language::Spice => "SPICE",
        }
    }

    /// Parse a display name, case-insensitively
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| HighlightError::UnknownLanguage(name.to_string()))
    }

    /// File extensions (lowercase, without the dot)
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::PlainText => &[],
            Language::Python => &["py", "pyw", "pyc", "pyd"],
            Language::C => &["c", "h", "cc", "cpp", "cxx", "hpp", "hh", "hxx"],
            Language::MatlabOctave => &["m"],
            Language::Spice => &["cir", "sp", "spice", "mod"],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extension to language lookup, with user overrides
#[derive(Debug, Clone)]
pub struct LanguageSelector {
    extension_map: HashMap<String, Language>,
}

impl LanguageSelector {
    /// Create a selector with the built-in extension table
    pub fn new() -> Self {
        let mut extension_map = HashMap::new();
        for lang in Language::ALL {
            for ext in lang.extensions() {
                extension_map.insert(ext.to_string(), lang);
            }
        }
        Self { extension_map }
    }

    /// Map an extension to a language, replacing any existing mapping
    pub fn set_extension(&mut self, ext: &str, language: Language) {
        let ext = ext.trim_start_matches('.').to_lowercase();
        self.extension_map.insert(ext, language);
    }

    /// Detect language from a file name; anything unknown is plain text
    pub fn detect(&self, filename: &Path) -> Language {
        filename
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.extension_map.get(&ext.to_lowercase()))
            .copied()
            .unwrap_or(Language::PlainText)
    }
}

impl Default for LanguageSelector {
    fn default() -> Self {
        Self::new()
    }
}
