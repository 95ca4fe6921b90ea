//! Match outcomes.

use serde::Serialize;

/// Captures and end offset of a successful attempt.
#[derive(Debug)]
pub(crate) struct Span<'i> {
    pub(crate) captures: Vec<&'i str>,
    pub(crate) end: usize,
}

impl<'i> Span<'i> {
    pub(crate) fn empty(end: usize) -> Self {
        Self {
            captures: Vec::new(),
            end,
        }
    }

    pub(crate) fn single(capture: &'i str, end: usize) -> Self {
        Self {
            captures: vec![capture],
            end,
        }
    }
}

/// Three-way result of one dispatch.
///
/// `Broken` means a term matched at least one phrase before failing. Only
/// the optional policy treats it differently from `Missed`.
#[derive(Debug)]
pub(crate) enum Outcome<'i> {
    Matched(Span<'i>),
    Missed,
    Broken(Vec<&'i str>),
}

impl<'i> Outcome<'i> {
    pub(crate) fn into_span(self) -> Option<Span<'i>> {
        match self {
            Self::Matched(span) => Some(span),
            Self::Missed | Self::Broken(_) => None,
        }
    }
}

/// Result of matching an input against an expression.
///
/// Captures borrow from the input. When the match failed they hold whatever
/// the top-level attempt had collected, which may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match<'i> {
    matched: bool,
    captures: Vec<&'i str>,
    consumed: usize,
}

impl<'i> Match<'i> {
    pub(crate) fn from_outcome(input: &'i str, outcome: Outcome<'i>) -> Self {
        match outcome {
            Outcome::Matched(span) => Self {
                matched: input[span.end..].trim().is_empty(),
                captures: span.captures,
                consumed: span.end,
            },
            Outcome::Missed => Self {
                matched: false,
                captures: Vec::new(),
                consumed: 0,
            },
            Outcome::Broken(captures) => Self {
                matched: false,
                captures,
                consumed: 0,
            },
        }
    }

    /// The expression matched and nothing but whitespace is left over.
    pub fn is_match(&self) -> bool {
        self.matched
    }

    pub fn captures(&self) -> &[&'i str] {
        &self.captures
    }

    pub fn into_captures(self) -> Vec<&'i str> {
        self.captures
    }

    /// Bytes of input consumed by the expression, before trailing whitespace.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}
