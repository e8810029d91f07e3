//! Matlab/Octave grammar

use super::words;
use crate::error::PatternError;
use crate::syntax::grammar::Grammar;
use crate::syntax::language::Language;
use crate::syntax::tokens::{StyleTagResolver, TokenClass};

const BUILTINS: &[&str] = &[
    "error", "warning", "size", "clear", "reshape", "eye", "ones", "zeros", "linspace",
    "logspace", "rand", "exp", "log", "log10", "sqrt", "abs", "arg", "conj", "imag", "real",
    "sin", "cos", "tan", "asin", "acos", "atan", "atan2", "sinh", "cosh", "tanh", "asinh",
    "acosh", "atanh", "sum", "prod", "ceil", "floor", "round", "max", "min", "sign", "mean",
    "std", "cov",
];

const KEYWORDS: &[&str] = &[
    "__FILE__", "__LINE__", "break", "case", "catch", "classdef", "continue", "do", "else",
    "elseif", "end", "end_try_catch", "end_unwind_protect", "endclassdef", "endenumeration",
    "endevents", "endfor", "endfunction", "endif", "endmethods", "endparfor", "endproperties",
    "endswitch", "endwhile", "enumeration", "events", "for", "function", "global", "if",
    "methods", "otherwise", "parfor", "persistent", "properties", "return", "switch", "try",
    "until", "unwind_protect", "unwind_protect_cleanup", "while",
];

/// Create Matlab/Octave grammar
pub fn matlab_grammar(resolver: &dyn StyleTagResolver) -> Result<Grammar, PatternError> {
    let mut grammar = Grammar::new(Language::MatlabOctave.name());

    // A quote right after an operand is the transpose operator
    let string = resolver.tag(TokenClass::String);
    grammar.add_span_rule(r"(?:^|[^)\]}\w.])(?P<hl>')", "'", string)?;
    grammar.add_span_rule(r#"""#, r#"""#, string)?;

    let comment = resolver.tag(TokenClass::Comment);
    grammar.add_span_rule(r"%\{", r"%\}", comment)?;
    grammar.add_rule(r"%.*$", comment)?;

    grammar.add_rule(&words(BUILTINS), resolver.tag(TokenClass::Builtin))?;

    let number = resolver.tag(TokenClass::Number);
    grammar.add_rule(r"\b(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?\b", number)?;
    grammar.add_rule(r"\b0[xX][0-9a-fA-F]+\b", number)?;
    grammar.add_rule(r"\b0[oO][0-7]+\b", number)?;
    grammar.add_rule(r"\b0[bB][01]+\b", number)?;

    grammar.add_rule(&words(KEYWORDS), resolver.tag(TokenClass::Keyword))?;

    grammar.set_whitespace_style(Some(resolver.tag(TokenClass::Whitespace)));
    Ok(grammar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::LineState;
    use crate::syntax::theme::Theme;

    #[test]
    fn test_transpose_is_not_a_string() {
        let theme = Theme::dark();
        let grammar = matlab_grammar(&theme).unwrap();
        let result = grammar.tokenize_line("B = A';", LineState::NORMAL);
        assert_eq!(result.end_state, LineState::NORMAL);
        assert!(result
            .spans
            .iter()
            .all(|s| s.style != theme.tag(TokenClass::String)));
    }

    #[test]
    fn test_string_argument() {
        let theme = Theme::dark();
        let grammar = matlab_grammar(&theme).unwrap();
        let result = grammar.tokenize_line("disp('it''s')", LineState::NORMAL);
        assert_eq!(result.end_state, LineState::NORMAL);
        let strings: Vec<_> = result
            .spans
            .iter()
            .filter(|s| s.style == theme.tag(TokenClass::String))
            .map(|s| (s.start, s.end()))
            .collect();
        assert_eq!(strings, vec![(5, 12)]);
    }

    #[test]
    fn test_block_comment() {
        let theme = Theme::dark();
        let grammar = matlab_grammar(&theme).unwrap();
        let first = grammar.tokenize_line("%{", LineState::NORMAL);
        assert_eq!(first.end_state, LineState::inside(2));
        let body = grammar.tokenize_line("x = 'unclosed", first.end_state);
        assert_eq!(body.end_state, LineState::inside(2));
        let last = grammar.tokenize_line("%} end", body.end_state);
        assert_eq!(last.end_state, LineState::NORMAL);
        assert_eq!(last.spans.last().map(|s| s.style), Some(theme.tag(TokenClass::Keyword)));
    }
}
