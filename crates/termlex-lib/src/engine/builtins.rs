//! Built-in recognizers.
//!
//! Each recognizer looks at the remaining input (whitespace already skipped)
//! and returns the byte length of the prefix it accepts, or `None`.
//! "Letter" is general category L*, "digit" is Nd.

use termlex_core::Builtin;
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

pub(crate) fn recognize(builtin: Builtin, rest: &str) -> Option<usize> {
    match builtin {
        Builtin::Label => label(rest),
        Builtin::Match => Some(rest.len()),
        Builtin::Int => int(rest),
    }
}

fn label(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    if !is_label_start(first) {
        return None;
    }
    Some(prefix_end(rest, chars, is_label_continue))
}

fn int(rest: &str) -> Option<usize> {
    let sign = usize::from(rest.starts_with('-'));
    let digits = &rest[sign..];
    let end = prefix_end(digits, digits.char_indices(), is_digit);
    // A lone `-` is not a number.
    (end > 0).then_some(sign + end)
}

/// Offset of the first char in `chars` rejected by `accept`.
fn prefix_end(
    text: &str,
    mut chars: impl Iterator<Item = (usize, char)>,
    accept: impl Fn(char) -> bool,
) -> usize {
    chars
        .find(|&(_, c)| !accept(c))
        .map_or(text.len(), |(idx, _)| idx)
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

fn is_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

fn is_label_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

fn is_label_continue(c: char) -> bool {
    is_label_start(c) || is_digit(c) || c == '\''
}
