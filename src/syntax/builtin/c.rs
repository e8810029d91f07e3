//! C/C++ grammar

use super::words;
use crate::error::PatternError;
use crate::syntax::grammar::Grammar;
use crate::syntax::language::Language;
use crate::syntax::tokens::{StyleTagResolver, TokenClass};

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "bitand", "bitor", "bool", "catch", "class",
    "compl", "concept", "consteval", "constexpr", "constinit", "const_cast", "co_await",
    "co_return", "co_yield", "decltype", "delete", "dynamic_cast", "explicit", "export", "false",
    "friend", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator",
    "or", "or_eq", "private", "protected", "public", "reinterpret_cast", "requires",
    "static_assert", "static_cast", "template", "this", "thread_local", "throw", "true", "try",
    "typeid", "typename", "using", "virtual", "xor", "xor_eq",
];

const TYPES: &[&str] = &[
    "size_t", "ptrdiff_t", "intptr_t", "uintptr_t", "int8_t", "int16_t", "int32_t", "int64_t",
    "uint8_t", "uint16_t", "uint32_t", "uint64_t", "FILE", "NULL",
];

/// Create C grammar (also covers C++)
pub fn c_grammar(resolver: &dyn StyleTagResolver) -> Result<Grammar, PatternError> {
    let mut grammar = Grammar::new(Language::C.name());

    grammar.add_span_rule(r"/\*", r"\*/", resolver.tag(TokenClass::Comment))?;

    // Literals close on the first unescaped delimiter
    let string = resolver.tag(TokenClass::String);
    grammar.add_span_rule(r#"""#, r#"(?:[^"\\]|\\.)*""#, string)?;
    grammar.add_span_rule(r"'", r"(?:[^'\\]|\\.)*'", string)?;

    grammar.add_rule(r"//.*$", resolver.tag(TokenClass::Comment))?;
    grammar.add_rule(r"^\s*(?P<hl>#\s*\w+)", resolver.tag(TokenClass::Directive))?;

    let keyword = resolver.tag(TokenClass::Keyword);
    grammar.add_rule(&words(C_KEYWORDS), keyword)?;
    grammar.add_rule(&words(CPP_KEYWORDS), keyword)?;
    grammar.add_rule(&words(TYPES), resolver.tag(TokenClass::Type))?;

    let number = resolver.tag(TokenClass::Number);
    grammar.add_rule(r"\b0[xX][0-9a-fA-F]+[uUlL]*\b", number)?;
    grammar.add_rule(r"\b\d+\.\d*(?:[eE][+-]?\d+)?[fFlL]?\b", number)?;
    grammar.add_rule(r"\b\d*\.\d+(?:[eE][+-]?\d+)?[fFlL]?\b", number)?;
    grammar.add_rule(r"\b\d+(?:[eE][+-]?\d+)?[uUlLfF]*\b", number)?;

    grammar.set_whitespace_style(Some(resolver.tag(TokenClass::Whitespace)));
    Ok(grammar)
}
