use std::path::Path;

use termlex_lib::{Colors, Registry};

use super::run_common::{MatchInput, load_input, render_match, validate};

fn input<'a>(input_path: Option<&'a str>, input_text: Option<&'a str>) -> MatchInput<'a> {
    MatchInput {
        grammar_path: Path::new("-"),
        format: None,
        input_path: input_path.map(Path::new),
        input_text,
    }
}

fn assign() -> Registry {
    let mut registry = Registry::new();
    registry
        .load_json(
            r#"{ "terms": { "assign": [[{ "ident": "!label" }], [{ "ident": "=" }], [{ "ident": "!int" }]] } }"#,
        )
        .unwrap();
    registry
}

#[test]
fn input_is_required() {
    assert_eq!(
        validate(&input(None, None)),
        Err("input is required: use positional argument or -i/--input")
    );
    assert_eq!(validate(&input(None, Some("x = 1"))), Ok(()));
    assert_eq!(validate(&input(Some("input.txt"), None)), Ok(()));
}

#[test]
fn grammar_and_input_not_both_stdin() {
    assert_eq!(
        validate(&input(Some("-"), None)),
        Err("grammar and input cannot both be from stdin")
    );
}

#[test]
fn inline_input_wins() {
    let text = load_input(Some("x = 1"), Some(Path::new("ignored.txt"))).unwrap();
    assert_eq!(text, "x = 1");
}

#[test]
fn render_matched() {
    let registry = assign();
    let result = registry.match_str("x = -42", "$assign").unwrap();

    insta::assert_snapshot!(render_match(&result, Colors::OFF), @r#"
    matched (7 bytes)
      0 "x"
      1 "="
      2 "-42"
    "#);
}

#[test]
fn render_partial() {
    let registry = assign();
    let result = registry.match_str("x = y", "$assign").unwrap();

    insta::assert_snapshot!(render_match(&result, Colors::OFF), @r#"
    no match
      0 "x"
      1 "="
    "#);
}

#[test]
fn render_colored() {
    let registry = assign();
    let result = registry.match_str("", "!match").unwrap();

    assert_eq!(
        render_match(&result, Colors::ON),
        "\x1b[32mmatched\x1b[0m \x1b[2m(0 bytes)\x1b[0m\n  \x1b[2m0\x1b[0m \x1b[32m\"\"\x1b[0m\n"
    );
}
