use super::*;
use crate::Colors;

#[test]
fn clean_grammar_has_no_diagnostics() {
    let json = r#"{
        "terms": {
            "foo": [[{ "ident": "foo" }]],
            "fooTerm": [[{ "ident": "$foo" }, { "ident": "!int" }]]
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert!(grammar.diagnostics().is_empty());
}

#[test]
fn reports_undefined_terms_and_unknown_builtins() {
    let json = r#"{
        "terms": {
            "a": [[{ "ident": "x" }], [{ "ident": "$missing" }, { "ident": "!float" }]],
            "b": [[], [{ "ident": "$a" }]]
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    let rendered: Vec<_> = grammar
        .diagnostics()
        .iter()
        .map(ToString::to_string)
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    warning: term `a`, phrase 2: reference to undefined term `missing`
    warning: term `a`, phrase 2: unknown built-in `!float`
    warning: term `b`, phrase 1: phrase has no alternatives and never matches
    ");
}

#[test]
fn colored_render() {
    let diagnostic = Diagnostic {
        term: "t".into(),
        phrase: 0,
        kind: DiagnosticKind::EmptyPhrase,
    };

    let rendered = diagnostic.render(Colors::ON);
    assert!(rendered.starts_with("\x1b[33mwarning\x1b[0m"));
    assert!(rendered.contains("\x1b[34m`t`\x1b[0m"));
}
