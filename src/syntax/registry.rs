//! Grammar registry
//!
//! Maps each language to the builder of its grammar. Grammars are plain
//! data built against an explicit style resolver, so reacting to a theme
//! change is a matter of building again and handing the result to the
//! engine.

use std::collections::HashMap;

use super::builtin::{self, GrammarBuilder};
use super::grammar::Grammar;
use super::language::Language;
use super::tokens::StyleTagResolver;
use crate::error::{HighlightError, Result};

/// Builders of the grammars available to code views
pub struct GrammarRegistry {
    builders: HashMap<Language, GrammarBuilder>,
}

impl GrammarRegistry {
    /// Create a registry with every built-in grammar
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (language, builder) in builtin::all_builders() {
            registry.register(language, builder);
        }
        registry
    }

    /// Create a registry without any grammar
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register or replace the builder for a language
    pub fn register(&mut self, language: Language, builder: GrammarBuilder) {
        self.builders.insert(language, builder);
    }

    /// Build the grammar of `language` against `resolver`
    pub fn build(&self, language: Language, resolver: &dyn StyleTagResolver) -> Result<Grammar> {
        let builder = self
            .builders
            .get(&language)
            .ok_or_else(|| HighlightError::UnknownLanguage(language.name().to_string()))?;
        let grammar = builder(resolver)?;
        tracing::debug!(
            language = language.name(),
            rules = grammar.rule_count(),
            span_rules = grammar.span_rule_count(),
            "built grammar"
        );
        Ok(grammar)
    }

    /// Build a grammar from its display name, e.g. "SPICE"
    pub fn build_named(&self, name: &str, resolver: &dyn StyleTagResolver) -> Result<Grammar> {
        self.build(Language::from_name(name)?, resolver)
    }

    /// Registered languages, in menu order
    pub fn languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.builders.contains_key(lang))
            .collect()
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::theme::Theme;

    #[test]
    fn test_builtin_languages() {
        let registry = GrammarRegistry::new();
        assert_eq!(registry.languages(), Language::ALL.to_vec());
    }

    #[test]
    fn test_build_named() {
        let registry = GrammarRegistry::new();
        let grammar = registry.build_named("Python", &Theme::light()).unwrap();
        assert_eq!(grammar.name(), "Python");
        assert_eq!(grammar.span_rule_count(), 4);
        assert!(matches!(
            registry.build_named("Verilog", &Theme::light()),
            Err(HighlightError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_unregistered_language() {
        let registry = GrammarRegistry::empty();
        assert!(registry.languages().is_empty());
        assert!(registry.build(Language::Spice, &Theme::dark()).is_err());
    }

    #[test]
    fn test_custom_builder() {
        fn shouty(_: &dyn StyleTagResolver) -> std::result::Result<Grammar, crate::error::PatternError> {
            Ok(Grammar::new("Shouty"))
        }
        let mut registry = GrammarRegistry::new();
        registry.register(Language::PlainText, shouty);
        let grammar = registry.build(Language::PlainText, &Theme::dark()).unwrap();
        assert_eq!(grammar.name(), "Shouty");
    }
}
