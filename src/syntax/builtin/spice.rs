//! SPICE netlist grammar

use crate::error::PatternError;
use crate::syntax::grammar::Grammar;
use crate::syntax::language::Language;
use crate::syntax::tokens::{StyleTagResolver, TokenClass};

/// Create SPICE grammar
pub fn spice_grammar(resolver: &dyn StyleTagResolver) -> Result<Grammar, PatternError> {
    let mut grammar = Grammar::new(Language::Spice.name());

    // Quoted expressions and file names
    let string = resolver.tag(TokenClass::String);
    grammar.add_span_rule("'", "'", string)?;
    grammar.add_span_rule(r#"""#, r#"""#, string)?;

    // Whole-line `*` comments and trailing `$` comments
    let comment = resolver.tag(TokenClass::Comment);
    grammar.add_rule(r"^\*.*$", comment)?;
    grammar.add_rule(r"\$.*$", comment)?;

    // Values with engineering suffix and optional unit: 10k, 2.2uF, 1Meg
    grammar.add_rule(
        r"\b(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?(?i:meg|mil|[tgkmunpf])?(?i:ohm|hz|[vafhs])?\b",
        resolver.tag(TokenClass::Number),
    )?;

    // Dot-commands: .tran, .param, .subckt, ...
    grammar.add_rule(r"(?:^|\W)(?P<hl>\.[a-zA-Z_]+)", resolver.tag(TokenClass::Keyword))?;

    grammar.set_whitespace_style(Some(resolver.tag(TokenClass::Whitespace)));
    Ok(grammar)
}
