use std::sync::Arc;
use std::thread;

use termlex_core::{Grammar, Term, Token};

use crate::registry::Registry;
use crate::shared::SharedRegistry;

const WORDS: &str = r#"{ "terms": { "word": [[{ "ident": "alpha" }]] } }"#;
const OTHER_WORDS: &str = r#"{ "terms": { "word": [[{ "ident": "beta" }]] } }"#;

fn matches(registry: &Registry, input: &str) -> bool {
    registry.match_str(input, "$word").unwrap().is_match()
}

#[test]
fn snapshot_is_unaffected_by_reload() {
    let shared = SharedRegistry::default();
    shared.load_json(WORDS).unwrap();

    let before = shared.snapshot();
    shared.load_json(OTHER_WORDS).unwrap();
    let after = shared.snapshot();

    assert!(matches(&before, "alpha"));
    assert!(!matches(&before, "beta"));
    assert!(matches(&after, "beta"));
    assert!(!matches(&after, "alpha"));
}

#[test]
fn failed_load_keeps_current_set() {
    let shared = SharedRegistry::default();
    shared.load_json(WORDS).unwrap();

    assert!(shared.load_json(r#"{ "terms": 1 }"#).is_err());
    assert!(shared.load_yaml("terms: [").is_err());

    assert!(matches(&shared.snapshot(), "alpha"));
}

#[test]
fn add_term_copies_on_write() {
    let shared = SharedRegistry::new(Registry::new());
    shared.load_json(WORDS).unwrap();

    let before = shared.snapshot();
    shared
        .add_term("extra", Term::sequence([Token::parse("gamma")]))
        .unwrap();

    assert!(!before.contains("extra"));
    let after = shared.snapshot();
    assert!(after.contains("extra"));
    assert!(after.match_str("gamma", "$extra").unwrap().is_match());
}

#[test]
fn invalid_term_keeps_current_set() {
    let shared = SharedRegistry::default();
    shared.load_json(WORDS).unwrap();
    let before = shared.snapshot();

    assert!(
        shared
            .add_term("word", Term::sequence([Token::parse("!label").many("")]))
            .is_err()
    );

    assert!(Arc::ptr_eq(&before, &shared.snapshot()));
}

#[test]
fn load_binary() {
    let shared = SharedRegistry::default();
    let bytes = Grammar::from_json(OTHER_WORDS).unwrap().to_binary();

    shared.load_binary(&bytes).unwrap();
    assert!(matches(&shared.snapshot(), "beta"));

    assert!(shared.load_binary(&bytes[..bytes.len() / 2]).is_err());
    assert!(matches(&shared.snapshot(), "beta"));
}

#[test]
fn load_xml() {
    let shared = SharedRegistry::default();
    shared
        .load_xml(r#"<Syntax><Term name="word"><Phrase><Token ident="delta"/></Phrase></Term></Syntax>"#)
        .unwrap();

    assert!(matches(&shared.snapshot(), "delta"));
}

#[test]
fn clear() {
    let shared = SharedRegistry::default();
    shared.load_json(WORDS).unwrap();
    shared.clear();

    assert!(shared.snapshot().is_empty());
}

#[test]
fn readers_see_whole_rule_sets() {
    let shared = SharedRegistry::default();
    shared.load_json(WORDS).unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let snapshot = shared.snapshot();
                    // Exactly one of the two definitions is visible.
                    assert!(matches(&snapshot, "alpha") ^ matches(&snapshot, "beta"));
                }
            });
        }
        scope.spawn(|| {
            for round in 0..200 {
                let json = if round % 2 == 0 { OTHER_WORDS } else { WORDS };
                shared.load_json(json).unwrap();
            }
        });
    });
}
