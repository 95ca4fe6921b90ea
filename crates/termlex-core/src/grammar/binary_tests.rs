use super::*;

const GRAMMAR: &str = r#"{
    "terms": {
        "program": [[{ "ident": "$statement", "cardinality": "many", "separator": ";" }]],
        "statement": [[{ "ident": "let" }], [{ "ident": "!label" }], [{ "ident": "=" }], [{ "ident": "$value" }]],
        "value": [[{ "ident": "!int" }, { "ident": "!label" }]]
    }
}"#;

#[test]
fn roundtrip() {
    let grammar = Grammar::from_json(GRAMMAR).unwrap();
    let binary = grammar.to_binary();
    let decoded = Grammar::from_binary(&binary).unwrap();

    assert_eq!(grammar, decoded);
}

#[test]
fn roundtrip_preserves_order() {
    let grammar = Grammar::from_json(GRAMMAR).unwrap();
    let decoded = Grammar::from_binary(&grammar.to_binary()).unwrap();

    let names: Vec<_> = decoded.names().collect();
    assert_eq!(names, ["program", "statement", "value"]);
}

#[test]
fn truncated_input_rejected() {
    let grammar = Grammar::from_json(GRAMMAR).unwrap();
    let binary = grammar.to_binary();

    let err = Grammar::from_binary(&binary[..binary.len() / 2]).unwrap_err();
    assert!(matches!(err, GrammarError::Binary(_)));
}

#[test]
fn decoded_grammar_is_validated() {
    let mut grammar = Grammar::new();
    grammar.insert("list", Term::sequence([Token::parse("x").many("  ")]));

    let err = Grammar::from_binary(&grammar.to_binary()).unwrap_err();
    assert!(matches!(err, GrammarError::BlankSeparator { .. }));
}
