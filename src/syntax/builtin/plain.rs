//! Plain text: nothing but visible whitespace

use crate::error::PatternError;
use crate::syntax::grammar::Grammar;
use crate::syntax::language::Language;
use crate::syntax::tokens::{StyleTagResolver, TokenClass};

pub fn plain_text_grammar(resolver: &dyn StyleTagResolver) -> Result<Grammar, PatternError> {
    let mut grammar = Grammar::new(Language::PlainText.name());
    grammar.set_whitespace_style(Some(resolver.tag(TokenClass::Whitespace)));
    Ok(grammar)
}
