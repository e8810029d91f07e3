//! Integration tests for highlighting: grammar -> tokenizer -> engine.

use ngspicer_highlight::syntax::StyleTagResolver;
use ngspicer_highlight::{
    Grammar, GrammarRegistry, HighlightEngine, Language, LineState, StyleTag, StyledSpan, Theme,
    TokenClass,
};

const COMMENT: StyleTag = StyleTag::new(0);
const KEYWORD: StyleTag = StyleTag::new(1);
const STRING: StyleTag = StyleTag::new(2);

fn c_like_grammar() -> Grammar {
    let mut grammar = Grammar::new("C-like");
    grammar.add_span_rule(r"/\*", r"\*/", COMMENT).unwrap();
    grammar.add_rule(r"\bint\b", KEYWORD).unwrap();
    grammar
}

// ── Tokenizer Properties ────────────────────────────────────────────

#[test]
fn test_tokenize_is_idempotent() {
    let grammar = GrammarRegistry::new()
        .build(Language::Python, &Theme::dark())
        .expect("python grammar");
    for line in ["def f(x):  # doc", "    '''open", "s = \"a\" + 'b' 0x1F"] {
        for state in [LineState::NORMAL, LineState::inside(0), LineState::inside(3)] {
            assert_eq!(grammar.tokenize_line(line, state), grammar.tokenize_line(line, state));
        }
    }
}

#[test]
fn test_state_propagation_through_block_comment() {
    let grammar = c_like_grammar();

    let first = grammar.tokenize_line("int x; /* start", LineState::NORMAL);
    assert_eq!(first.end_state, LineState::inside(0));
    assert_eq!(
        first.spans,
        vec![StyledSpan::new(0, 3, KEYWORD), StyledSpan::new(7, 8, COMMENT)]
    );

    let second = grammar.tokenize_line("middle", first.end_state);
    assert_eq!(second.end_state, LineState::inside(0));
    assert_eq!(second.spans, vec![StyledSpan::new(0, 6, COMMENT)]);

    let third = grammar.tokenize_line("end */ int y;", second.end_state);
    assert_eq!(third.end_state, LineState::NORMAL);
    assert_eq!(
        third.spans,
        vec![StyledSpan::new(0, 6, COMMENT), StyledSpan::new(7, 3, KEYWORD)]
    );
}

#[test]
fn test_rules_never_start_inside_spans() {
    let mut grammar = c_like_grammar();
    grammar.add_span_rule("\"", "\"", STRING).unwrap();

    let result = grammar.tokenize_line(r#"int a = "int"; /* int */ int"#, LineState::NORMAL);
    let covered: Vec<_> = result
        .spans
        .iter()
        .filter(|s| s.style != KEYWORD)
        .map(|s| s.start..s.end())
        .collect();
    for keyword in result.spans.iter().filter(|s| s.style == KEYWORD) {
        assert!(covered.iter().all(|range| !range.contains(&keyword.start)));
    }
    assert_eq!(result.spans.iter().filter(|s| s.style == KEYWORD).count(), 2);
}

#[test]
fn test_lowest_span_index_wins_tie() {
    let mut grammar = Grammar::new("Tie");
    grammar.add_span_rule("<", ">", COMMENT).unwrap();
    grammar.add_span_rule("<", ";", STRING).unwrap();

    for _ in 0..3 {
        let result = grammar.tokenize_line("a <b; c> d", LineState::NORMAL);
        assert_eq!(result.spans, vec![StyledSpan::new(2, 6, COMMENT)]);
        assert_eq!(result.end_state, LineState::NORMAL);
    }
}

#[test]
fn test_empty_grammar_styles_nothing() {
    let grammar = Grammar::new("Empty");
    for state in [LineState::NORMAL, LineState::inside(2)] {
        let result = grammar.tokenize_line("int x; /* y */", state);
        assert!(result.spans.is_empty());
        assert_eq!(result.end_state, LineState::NORMAL);
    }
}

#[test]
fn test_python_whitespace_example() {
    let theme = Theme::light();
    let grammar = GrammarRegistry::new()
        .build(Language::Python, &theme)
        .expect("python grammar");

    let result = grammar.tokenize_line("  return 1", LineState::NORMAL);
    let whitespace = theme.tag(TokenClass::Whitespace);
    assert_eq!(
        result.spans,
        vec![
            StyledSpan::new(0, 2, whitespace),
            StyledSpan::new(2, 6, theme.tag(TokenClass::Keyword)),
            StyledSpan::new(8, 1, whitespace),
            StyledSpan::new(9, 1, theme.tag(TokenClass::Number)),
        ]
    );

    let result = grammar.tokenize_line("x = 1  # c", LineState::NORMAL);
    assert_eq!(
        result.spans.last(),
        Some(&StyledSpan::new(7, 3, theme.tag(TokenClass::Comment)))
    );
}

// ── Engine ──────────────────────────────────────────────────────────

#[test]
fn test_fixpoint_stops_at_unchanged_state() {
    let mut engine = HighlightEngine::with_grammar(c_like_grammar());
    engine.set_text("int a;\nint b;\nint c;\nint d;");

    let range = engine.on_line_changed(1, "int bee;").unwrap();
    assert_eq!(range, 1..2);

    let range = engine.on_line_changed(1, "int b; /*").unwrap();
    assert_eq!(range, 1..4);
    assert_eq!(engine.spans(3), &[StyledSpan::new(0, 6, COMMENT)]);

    let range = engine.on_line_changed(1, "int b;").unwrap();
    assert_eq!(range, 1..4);
    assert_eq!(engine.spans(3), &[StyledSpan::new(0, 3, KEYWORD)]);
}

#[test]
fn test_engine_with_spice_grammar() {
    let theme = Theme::dark();
    let grammar = GrammarRegistry::new()
        .build(Language::Spice, &theme)
        .expect("spice grammar");
    let mut engine = HighlightEngine::with_grammar(grammar);
    engine.set_text("* divider\nR1 in out 1k\n.op\n.end");

    assert_eq!(engine.line_count(), 4);
    assert_eq!(
        engine.spans(0),
        &[StyledSpan::new(0, 9, theme.tag(TokenClass::Comment))]
    );
    assert!(engine
        .spans(2)
        .contains(&StyledSpan::new(0, 3, theme.tag(TokenClass::Keyword))));
    for line in 0..engine.line_count() {
        assert_eq!(engine.line_state(line), Some(LineState::NORMAL));
    }
}

#[test]
fn test_insert_matches_fresh_highlight() {
    let theme = Theme::light();
    let registry = GrammarRegistry::new();
    let c = || registry.build(Language::C, &theme).expect("c grammar");

    let mut engine = HighlightEngine::with_grammar(c());
    engine.set_text("int a;\nc = 'open\ne");
    assert_eq!(engine.line_state(2), Some(LineState::inside(2)));

    engine.insert_lines(2, ["x'"]).unwrap();

    let mut fresh = HighlightEngine::with_grammar(c());
    fresh.set_text("int a;\nc = 'open\nx'\ne");
    for line in 0..fresh.line_count() {
        assert_eq!(engine.spans(line), fresh.spans(line), "line {}", line);
        assert_eq!(engine.line_state(line), fresh.line_state(line), "line {}", line);
    }
    assert!(engine.spans(3).is_empty());
}

#[test]
fn test_python_comment_marker_inside_string() {
    let theme = Theme::light();
    let grammar = GrammarRegistry::new()
        .build(Language::Python, &theme)
        .expect("python grammar");

    // The `#.*$` match starting inside the string covers the later `#` too
    let result = grammar.tokenize_line(r#"s = "a#b"  # note"#, LineState::NORMAL);
    let comment = theme.tag(TokenClass::Comment);
    assert!(result.spans.iter().all(|s| s.style != comment));
}
