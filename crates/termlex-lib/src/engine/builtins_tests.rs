use termlex_core::Builtin;

use super::builtins::recognize;

fn accepted(builtin: Builtin, rest: &str) -> Option<&str> {
    recognize(builtin, rest).map(|len| &rest[..len])
}

#[test]
fn label_accepts_identifier_prefix() {
    assert_eq!(accepted(Builtin::Label, "foo"), Some("foo"));
    assert_eq!(accepted(Builtin::Label, "f00 bar"), Some("f00"));
    assert_eq!(accepted(Builtin::Label, "_"), Some("_"));
    assert_eq!(accepted(Builtin::Label, "x'' = 1"), Some("x''"));
    assert_eq!(accepted(Builtin::Label, "ñandú!"), Some("ñandú"));
}

#[test]
fn label_rejects_bad_start() {
    assert_eq!(accepted(Builtin::Label, ""), None);
    assert_eq!(accepted(Builtin::Label, "0abc"), None);
    assert_eq!(accepted(Builtin::Label, "'a"), None);
    assert_eq!(accepted(Builtin::Label, " a"), None);
}

#[test]
fn label_uses_unicode_letters_and_decimal_digits() {
    assert_eq!(accepted(Builtin::Label, "ж٣ = 1"), Some("ж٣"));
    // Other numbers (No, Nl) are neither letters nor digits.
    assert_eq!(accepted(Builtin::Label, "x²"), Some("x"));
    assert_eq!(accepted(Builtin::Label, "a½"), Some("a"));
    assert_eq!(accepted(Builtin::Label, "Ⅻ"), None);
    // Combining marks are not letters.
    assert_eq!(accepted(Builtin::Label, "e\u{0301}"), Some("e"));
}

#[test]
fn match_takes_everything() {
    assert_eq!(accepted(Builtin::Match, ""), Some(""));
    assert_eq!(accepted(Builtin::Match, "foo bar  "), Some("foo bar  "));
}

#[test]
fn int_accepts_signed_digits() {
    assert_eq!(accepted(Builtin::Int, "0"), Some("0"));
    assert_eq!(accepted(Builtin::Int, "-1"), Some("-1"));
    assert_eq!(accepted(Builtin::Int, "123bar"), Some("123"));
    assert_eq!(accepted(Builtin::Int, "-45-6"), Some("-45"));
}

#[test]
fn int_accepts_decimal_digits_of_any_script() {
    assert_eq!(accepted(Builtin::Int, "٤٢"), Some("٤٢"));
    assert_eq!(accepted(Builtin::Int, "-१२ x"), Some("-१२"));
    assert_eq!(accepted(Builtin::Int, "1²"), Some("1"));
    assert_eq!(accepted(Builtin::Int, "½"), None);
    assert_eq!(accepted(Builtin::Int, "-Ⅻ"), None);
}

#[test]
fn int_rejects_missing_digits() {
    assert_eq!(accepted(Builtin::Int, ""), None);
    assert_eq!(accepted(Builtin::Int, "-"), None);
    assert_eq!(accepted(Builtin::Int, "- 1"), None);
    assert_eq!(accepted(Builtin::Int, "+1"), None);
    assert_eq!(accepted(Builtin::Int, "foo"), None);
}
