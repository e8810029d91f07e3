//! Built-in grammars
//!
//! Each grammar is a builder function from a style resolver to plain rule
//! data. Rule order inside a builder is significant: earlier rules win
//! ties at the same offset.

mod c;
mod matlab;
mod plain;
mod python;
mod spice;

use super::grammar::Grammar;
use super::language::Language;
use super::tokens::StyleTagResolver;
use crate::error::PatternError;

/// Builds the grammar of one language against a resolver
pub type GrammarBuilder = fn(&dyn StyleTagResolver) -> Result<Grammar, PatternError>;

/// Get every built-in language with its builder
pub fn all_builders() -> Vec<(Language, GrammarBuilder)> {
    vec![
        (Language::PlainText, plain::plain_text_grammar as GrammarBuilder),
        (Language::Python, python::python_grammar as GrammarBuilder),
        (Language::C, c::c_grammar as GrammarBuilder),
        (Language::MatlabOctave, matlab::matlab_grammar as GrammarBuilder),
        (Language::Spice, spice::spice_grammar as GrammarBuilder),
    ]
}

/// Join words into a single whole-word alternation
fn words(list: &[&str]) -> String {
    format!(r"\b(?:{})\b", list.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::theme::Theme;

    #[test]
    fn test_all_builders_compile() {
        let theme = Theme::dark();
        for (language, build) in all_builders() {
            let grammar = build(&theme).unwrap();
            assert_eq!(grammar.name(), language.name());
        }
    }

    #[test]
    fn test_words() {
        assert_eq!(words(&["if", "else"]), r"\b(?:if|else)\b");
    }
}
