//! Python grammar

use super::words;
use crate::error::PatternError;
use crate::syntax::grammar::Grammar;
use crate::syntax::language::Language;
use crate::syntax::tokens::{StyleTagResolver, TokenClass};

const CONSTANTS: &[&str] = &["False", "True", "None", "NotImplemented", "Ellipsis"];

const BUILTINS: &[&str] = &[
    "abs", "aiter", "all", "anext", "any", "ascii", "bin", "bool", "breakpoint", "bytearray",
    "bytes", "callable", "chr", "classmethod", "compile", "complex", "delattr", "dict", "dir",
    "divmod", "enumerate", "eval", "exec", "filter", "float", "format", "frozenset", "getattr",
    "globals", "hasattr", "hash", "help", "hex", "id", "input", "int", "isinstance",
    "issubclass", "iter", "len", "list", "locals", "map", "max", "memoryview", "min", "next",
    "object", "oct", "open", "ord", "pow", "print", "property", "range", "repr", "reversed",
    "round", "set", "setattr", "slice", "sorted", "staticmethod", "str", "sum", "super", "tuple",
    "type", "vars", "zip",
];

const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Create Python grammar
pub fn python_grammar(resolver: &dyn StyleTagResolver) -> Result<Grammar, PatternError> {
    let mut grammar = Grammar::new(Language::Python.name());

    // Strings; triple quotes first so they win over the single quote
    let string = resolver.tag(TokenClass::String);
    grammar.add_span_rule("'''", "'''", string)?;
    grammar.add_span_rule(r#"""""#, r#"""""#, string)?;
    grammar.add_span_rule("'", "'", string)?;
    grammar.add_span_rule(r#"""#, r#"""#, string)?;

    grammar.add_rule(r"#.*$", resolver.tag(TokenClass::Comment))?;

    // Special methods, decorators, and names being defined
    let definition = resolver.tag(TokenClass::Definition);
    grammar.add_rule(r"\b__\w+__\b", definition)?;
    grammar.add_rule(r"@\w+", definition)?;
    grammar.add_rule(r"\bclass\s+(?P<hl>\w+)", definition)?;
    grammar.add_rule(r"\bdef\s+(?P<hl>\w+)", definition)?;

    let builtin = resolver.tag(TokenClass::Builtin);
    grammar.add_rule(&words(CONSTANTS), builtin)?;
    grammar.add_rule(&words(BUILTINS), builtin)?;

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
    use crate::syntax::style::StyledSpan;
    use crate::syntax::theme::Theme;

    fn classes(text: &str, state: LineState) -> (Vec<(usize, usize, TokenClass)>, LineState) {
        let theme = Theme::dark();
        let grammar = python_grammar(&theme).unwrap();
        let result = grammar.tokenize_line(text, state);
        let spans = result
            .spans
            .iter()
            .map(|s: &StyledSpan| {
                let class = TokenClass::ALL
                    .into_iter()
                    .find(|c| theme.tag(*c) == s.style)
                    .unwrap();
                (s.start, s.end(), class)
            })
            .collect();
        (spans, result.end_state)
    }

    #[test]
    fn test_return_statement() {
        let (spans, state) = classes("  return 1", LineState::NORMAL);
        assert_eq!(state, LineState::NORMAL);
        assert_eq!(
            spans,
            vec![
                (0, 2, TokenClass::Whitespace),
                (2, 8, TokenClass::Keyword),
                (8, 9, TokenClass::Whitespace),
                (9, 10, TokenClass::Number),
            ]
        );
    }

    #[test]
    fn test_comment_after_code() {
        let (spans, _) = classes("x = 1  # c", LineState::NORMAL);
        assert_eq!(spans.last(), Some(&(7, 10, TokenClass::Comment)));
        assert!(spans.contains(&(5, 7, TokenClass::Whitespace)));
    }

    #[test]
    fn test_def_name_and_keyword() {
        let (spans, _) = classes("def area(r):", LineState::NORMAL);
        assert_eq!(
            spans,
            vec![
                (0, 3, TokenClass::Keyword),
                (3, 4, TokenClass::Whitespace),
                (4, 8, TokenClass::Definition),
            ]
        );
    }

    #[test]
    fn test_docstring_spans_lines() {
        let (spans, state) = classes(r#"    """Compute gain"#, LineState::NORMAL);
        assert_eq!(state, LineState::inside(1));
        assert_eq!(spans.last(), Some(&(4, 19, TokenClass::String)));

        let (spans, state) = classes(r#"    for 2 lines""" + 3"#, state);
        assert_eq!(state, LineState::NORMAL);
        assert_eq!(spans[0], (0, 18, TokenClass::String));
        assert_eq!(spans.last(), Some(&(21, 22, TokenClass::Number)));
    }

    #[test]
    fn test_hex_number() {
        let (spans, _) = classes("mask = 0xFF", LineState::NORMAL);
        assert_eq!(spans.last(), Some(&(7, 11, TokenClass::Number)));
    }
}
