//! Token classes and style tags
//!
//! A [`TokenClass`] names what a piece of text *is* (comment, keyword, ...).
//! A [`StyleTag`] is the opaque handle a grammar stores for painting it,
//! issued by a [`StyleTagResolver`] when the grammar is built.

/// Semantic token classes recognized by the built-in grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Line and block comments
    Comment,
    /// String and character literals
    String,
    /// Numeric literals, including engineering suffixes
    Number,
    /// Language keywords
    Keyword,
    /// Built-in functions and constants
    Builtin,
    /// Names being defined (`def f`, `class C`), decorators, dunders
    Definition,
    /// SPICE dot-commands and C preprocessor directives
    Directive,
    /// Standard type names
    Type,
    /// Runs of spaces and tabs
    Whitespace,
}

impl TokenClass {
    pub const COUNT: usize = 9;

    /// Every class, in palette order
    pub const ALL: [TokenClass; Self::COUNT] = [
        TokenClass::Comment,
        TokenClass::String,
        TokenClass::Number,
        TokenClass::Keyword,
        TokenClass::Builtin,
        TokenClass::Definition,
        TokenClass::Directive,
        TokenClass::Type,
        TokenClass::Whitespace,
    ];

    /// Position of this class in [`TokenClass::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the config-file name for this class
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::Comment => "comment",
            TokenClass::String => "string",
            TokenClass::Number => "number",
            TokenClass::Keyword => "keyword",
            TokenClass::Builtin => "builtin",
            TokenClass::Definition => "definition",
            TokenClass::Directive => "directive",
            TokenClass::Type => "type",
            TokenClass::Whitespace => "whitespace",
        }
    }

    /// Parse a class from its config-file name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }
}

/// Opaque identifier for a visual style
///
/// The engine only copies and compares these; a theme maps them back to
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleTag(u16);

impl StyleTag {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u16 {
        self.0
    }
}

/// Issues style tags for token classes
///
/// Grammar builders take one of these explicitly, so a theme change is
/// handled by rebuilding the grammar against the new resolver.
pub trait StyleTagResolver {
    fn tag(&self, class: TokenClass) -> StyleTag;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for class in TokenClass::ALL {
            assert_eq!(TokenClass::from_name(class.name()), Some(class));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenClass::from_name("Keyword"), None);
        assert_eq!(TokenClass::from_name(""), None);
    }

    #[test]
    fn test_index_matches_palette_order() {
        for (i, class) in TokenClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }
}
