use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_grammar() {
    let json = r#"{
        "terms": {
            "foo": [[{ "ident": "foo" }]],
            "fooTerm": [[{ "ident": "$foo" }]]
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.len(), 2);
    assert_eq!(
        grammar.get("fooTerm").unwrap().phrases[0].alternatives[0].kind,
        TokenKind::term("foo")
    );
}

#[test]
fn cardinality_defaults_to_one() {
    let json = r#"{ "terms": { "foo": [[{ "ident": "foo" }]] } }"#;

    let grammar = Grammar::from_json(json).unwrap();
    let token = &grammar.get("foo").unwrap().phrases[0].alternatives[0];
    assert_eq!(token.cardinality, Cardinality::One);
}

#[test]
fn parse_all_cardinalities() {
    let json = r#"{
        "terms": {
            "t": [
                [{ "ident": "a", "cardinality": "one" }],
                [{ "ident": "b", "cardinality": "optional" }],
                [{ "ident": "c", "cardinality": "atLeastOne", "separator": "," }],
                [{ "ident": "d", "cardinality": "many", "separator": ";" }]
            ]
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    let cardinalities: Vec<_> = grammar
        .get("t")
        .unwrap()
        .tokens()
        .map(|t| t.cardinality.clone())
        .collect();
    assert_eq!(
        cardinalities,
        vec![
            Cardinality::One,
            Cardinality::Optional,
            Cardinality::AtLeastOne {
                separator: ",".into()
            },
            Cardinality::Many {
                separator: ";".into()
            },
        ]
    );
}

#[test]
fn separator_ignored_for_single_tokens() {
    let json = r#"{ "terms": { "t": [[{ "ident": "a", "separator": "," }]] } }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(
        grammar.get("t").unwrap().phrases[0].alternatives[0].cardinality,
        Cardinality::One
    );
}

#[test]
fn unknown_cardinality_rejects_document() {
    let json = r#"{
        "terms": {
            "good": [[{ "ident": "foo" }]],
            "bad": [[{ "ident": "foo", "cardinality": "twice" }]]
        }
    }"#;

    let err = Grammar::from_json(json).unwrap_err();
    assert!(matches!(err, GrammarError::Json(_)));
    assert!(err.to_string().contains("unknown variant `twice`"));
}

#[test]
fn repeating_token_requires_separator() {
    let json = r#"{ "terms": { "list": [[{ "ident": "foo", "cardinality": "many" }]] } }"#;

    let err = Grammar::from_json(json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "term `list`, phrase 1, alternative 1: `many` token requires a separator"
    );
}

#[test]
fn blank_separator_rejected() {
    let json = r#"{
        "terms": {
            "list": [
                [{ "ident": "x" }],
                [{ "ident": "y" }, { "ident": "foo", "cardinality": "atLeastOne", "separator": " " }]
            ]
        }
    }"#;

    let err = Grammar::from_json(json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "term `list`, phrase 2, alternative 2: separator must contain a non-whitespace character"
    );
}

#[test]
fn unknown_fields_rejected() {
    let json = r#"{ "terms": { "t": [[{ "ident": "a", "cardnality": "many" }]] } }"#;

    let err = Grammar::from_json(json).unwrap_err();
    assert!(err.to_string().contains("unknown field `cardnality`"));
}

#[test]
fn malformed_structure_rejected() {
    let json = r#"{ "terms": { "t": [{ "ident": "a" }] } }"#;

    assert!(matches!(
        Grammar::from_json(json),
        Err(GrammarError::Json(_))
    ));
}

#[test]
fn missing_terms_is_empty_grammar() {
    let grammar = Grammar::from_json("{}").unwrap();
    assert!(grammar.is_empty());
}

#[test]
fn duplicate_names_keep_last_definition() {
    let json = r#"{
        "terms": {
            "t": [[{ "ident": "first" }]],
            "t": [[{ "ident": "second" }]]
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.len(), 1);
    assert_eq!(
        grammar.get("t").unwrap().phrases[0].alternatives[0].kind,
        TokenKind::literal("second")
    );
}

#[test]
fn preserves_term_order() {
    let json = r#"{
        "terms": {
            "program": [[{ "ident": "$statement" }]],
            "statement": [[{ "ident": "$expression" }]],
            "expression": [[{ "ident": "x" }]]
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    let names: Vec<_> = grammar.names().collect();
    assert_eq!(names, ["program", "statement", "expression"]);
}

#[test]
fn parse_yaml() {
    let yaml = indoc! {r#"
        terms:
          fooOptionalBar:
            - - ident: foo
            - - ident: bar
                cardinality: optional
          atLeastOneFoo:
            - - ident: foo
                cardinality: atLeastOne
                separator: ","
    "#};

    let grammar = Grammar::from_yaml(yaml).unwrap();
    assert_eq!(grammar.len(), 2);
    assert_eq!(
        grammar.get("fooOptionalBar").unwrap().phrases[1].alternatives[0].cardinality,
        Cardinality::Optional
    );
    assert_eq!(
        grammar.get("atLeastOneFoo").unwrap().phrases[0].alternatives[0].cardinality,
        Cardinality::AtLeastOne {
            separator: ",".into()
        }
    );
}

#[test]
fn yaml_unknown_cardinality_rejected() {
    let yaml = indoc! {"
        terms:
          t:
            - - ident: foo
                cardinality: sometimes
    "};

    assert!(matches!(
        Grammar::from_yaml(yaml),
        Err(GrammarError::Yaml(_))
    ));
}

#[test]
fn render_json() {
    let mut grammar = Grammar::new();
    grammar.insert("list", Term::sequence([Token::parse("$item").many(",")]));
    grammar.insert(
        "item",
        Term::new(vec![Phrase::new(vec![
            Token::parse("!int"),
            Token::new(TokenKind::literal("$")),
        ])]),
    );

    insta::assert_snapshot!(grammar.to_json(), @r#"
    {
      "terms": {
        "list": [
          [
            {
              "ident": "$item",
              "cardinality": "many",
              "separator": ","
            }
          ]
        ],
        "item": [
          [
            {
              "ident": "!int"
            },
            {
              "ident": "@$"
            }
          ]
        ]
      }
    }
    "#);
}

#[test]
fn rendered_json_parses_back() {
    let json = r#"{
        "terms": {
            "fooIntBar": [[{ "ident": "foo" }], [{ "ident": "!int" }], [{ "ident": "bar" }]],
            "escaped": [[{ "ident": "@@" }, { "ident": "@!" }]]
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    let reparsed = Grammar::from_json(&grammar.to_json()).unwrap();
    assert_eq!(grammar, reparsed);
}
