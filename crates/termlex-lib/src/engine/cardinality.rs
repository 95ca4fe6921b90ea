//! Repetition policies.
//!
//! Repetition is incremental: after each item the separator is tried, and
//! only a separator that matches commits to another item. Text after the
//! repetition may therefore contain the separator freely.

use termlex_core::{Cardinality, Token, TokenKind};

use super::error::RuntimeError;
use super::matcher::Run;
use super::outcome::{Outcome, Span};

impl<'i> Run<'_, 'i> {
    pub(super) fn token(
        &mut self,
        token: &Token,
        pos: usize,
    ) -> Result<Option<Span<'i>>, RuntimeError> {
        match &token.cardinality {
            Cardinality::One => Ok(self.dispatch(&token.kind, pos)?.into_span()),
            Cardinality::Optional => self.optional(&token.kind, pos),
            Cardinality::AtLeastOne { separator } => self.repeat(&token.kind, separator, pos),
            Cardinality::Many { separator } => {
                if self.at_end(pos) {
                    return Ok(Some(Span::empty(pos)));
                }
                self.repeat(&token.kind, separator, pos)
            }
        }
    }

    /// Absent is fine; attempted and broken is not.
    fn optional(
        &mut self,
        kind: &TokenKind,
        pos: usize,
    ) -> Result<Option<Span<'i>>, RuntimeError> {
        if self.at_end(pos) {
            return Ok(Some(Span::empty(pos)));
        }
        let span = match self.dispatch(kind, pos)? {
            Outcome::Matched(span) => Some(span),
            Outcome::Missed => Some(Span::empty(pos)),
            Outcome::Broken(_) => None,
        };
        Ok(span)
    }

    /// One or more items joined by `separator`. A trailing separator fails.
    fn repeat(
        &mut self,
        kind: &TokenKind,
        separator: &str,
        pos: usize,
    ) -> Result<Option<Span<'i>>, RuntimeError> {
        let Some(mut span) = self.dispatch(kind, pos)?.into_span() else {
            return Ok(None);
        };

        while let Some(next) = self.separator(separator, span.end) {
            let Some(item) = self.dispatch(kind, next)?.into_span() else {
                return Ok(None);
            };
            span.captures.extend(item.captures);
            span.end = item.end;
        }
        Ok(Some(span))
    }

    fn separator(&self, separator: &str, pos: usize) -> Option<usize> {
        let pos = self.skip_whitespace(pos);
        self.rest(pos)
            .starts_with(separator)
            .then(|| pos + separator.len())
    }
}
