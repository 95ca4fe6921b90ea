//! Term resolution and token dispatch.

use termlex_core::{Builtin, Phrase, Term, TokenKind};

use super::builtins;
use super::error::RuntimeError;
use super::limits::MatchLimits;
use super::outcome::{Match, Outcome, Span};
use crate::registry::Registry;

/// Matches inputs against the terms of a registry.
///
/// Holds a shared borrow of the registry, so the registry cannot change
/// while a matcher exists. Any number of matchers may share one registry,
/// also across threads.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'r> {
    registry: &'r Registry,
    limits: MatchLimits,
}

impl<'r> Matcher<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            limits: MatchLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: MatchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Match `input` against an expression such as `$term`, `!int` or `foo`.
    ///
    /// Succeeds only when the expression matches and the rest of the input
    /// is whitespace.
    pub fn match_str<'i>(
        &self,
        input: &'i str,
        expression: &str,
    ) -> Result<Match<'i>, RuntimeError> {
        self.match_kind(input, &TokenKind::parse(expression))
    }

    pub fn match_kind<'i>(
        &self,
        input: &'i str,
        kind: &TokenKind,
    ) -> Result<Match<'i>, RuntimeError> {
        let mut run = Run::new(self.registry, input, self.limits);
        let outcome = run.dispatch(kind, 0)?;
        let result = Match::from_outcome(input, outcome);
        tracing::debug!(
            expression = %kind,
            matched = result.is_match(),
            captures = result.captures().len(),
            consumed = result.consumed(),
            "match finished"
        );
        Ok(result)
    }
}

/// State of one match: the input is immutable, positions are byte offsets.
///
/// Every attempt returns the offset it reached; a failed attempt simply
/// drops it, so nothing has to be rolled back.
pub(crate) struct Run<'r, 'i> {
    registry: &'r Registry,
    input: &'i str,
    exec_fuel: u32,
    depth: u32,
    limits: MatchLimits,
}

impl<'r, 'i> Run<'r, 'i> {
    pub(crate) fn new(registry: &'r Registry, input: &'i str, limits: MatchLimits) -> Self {
        Self {
            registry,
            input,
            exec_fuel: limits.exec_fuel(),
            depth: 0,
            limits,
        }
    }

    pub(super) fn rest(&self, pos: usize) -> &'i str {
        &self.input[pos..]
    }

    pub(super) fn skip_whitespace(&self, pos: usize) -> usize {
        let rest = self.rest(pos);
        pos + (rest.len() - rest.trim_start().len())
    }

    /// Only whitespace remains from `pos`.
    pub(super) fn at_end(&self, pos: usize) -> bool {
        self.rest(pos).trim_start().is_empty()
    }

    /// Skip whitespace, then match a single token kind once.
    pub(super) fn dispatch(
        &mut self,
        kind: &TokenKind,
        pos: usize,
    ) -> Result<Outcome<'i>, RuntimeError> {
        self.consume_fuel()?;
        let pos = self.skip_whitespace(pos);
        let outcome = match kind {
            TokenKind::Literal(text) => self.literal(text, pos),
            TokenKind::Term(name) => return self.term(name, pos),
            TokenKind::Builtin(builtin) => self.builtin(*builtin, pos),
            TokenKind::UnknownBuiltin(_) => Outcome::Missed,
        };
        Ok(outcome)
    }

    fn literal(&self, text: &str, pos: usize) -> Outcome<'i> {
        let rest = self.rest(pos);
        if rest.starts_with(text) {
            Outcome::Matched(Span::single(&rest[..text.len()], pos + text.len()))
        } else {
            Outcome::Missed
        }
    }

    fn builtin(&self, builtin: Builtin, pos: usize) -> Outcome<'i> {
        let rest = self.rest(pos);
        match builtins::recognize(builtin, rest) {
            Some(len) => Outcome::Matched(Span::single(&rest[..len], pos + len)),
            None => Outcome::Missed,
        }
    }

    fn term(&mut self, name: &str, pos: usize) -> Result<Outcome<'i>, RuntimeError> {
        let registry = self.registry;
        let Some(term) = registry.get(name) else {
            tracing::trace!(term = name, pos, "undefined term");
            return Ok(Outcome::Missed);
        };

        self.enter(name)?;
        let outcome = self.phrases(term, pos);
        self.depth -= 1;
        let outcome = outcome?;

        tracing::trace!(
            term = name,
            pos,
            depth = self.depth,
            outcome = outcome.label(),
            "term attempt"
        );
        Ok(outcome)
    }

    /// Match every phrase in order. No backtracking into earlier phrases.
    fn phrases(&mut self, term: &Term, mut pos: usize) -> Result<Outcome<'i>, RuntimeError> {
        let mut captures = Vec::new();
        for (idx, phrase) in term.phrases.iter().enumerate() {
            match self.phrase(phrase, pos)? {
                Some(span) => {
                    captures.extend(span.captures);
                    pos = span.end;
                }
                None if idx == 0 => return Ok(Outcome::Missed),
                None => return Ok(Outcome::Broken(captures)),
            }
        }
        Ok(Outcome::Matched(Span { captures, end: pos }))
    }

    /// First alternative that matches wins.
    fn phrase(
        &mut self,
        phrase: &Phrase,
        pos: usize,
    ) -> Result<Option<Span<'i>>, RuntimeError> {
        for token in &phrase.alternatives {
            if let Some(span) = self.token(token, pos)? {
                return Ok(Some(span));
            }
        }
        Ok(None)
    }

    fn enter(&mut self, name: &str) -> Result<(), RuntimeError> {
        if self.depth >= self.limits.recursion_limit {
            tracing::warn!(
                term = name,
                limit = self.limits.recursion_limit,
                "recursion limit exceeded"
            );
            return Err(RuntimeError::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    fn consume_fuel(&mut self) -> Result<(), RuntimeError> {
        if self.exec_fuel == 0 {
            tracing::warn!(limit = self.limits.exec_fuel, "execution fuel exhausted");
            return Err(RuntimeError::ExecFuelExhausted);
        }
        self.exec_fuel -= 1;
        Ok(())
    }
}

impl Outcome<'_> {
    fn label(&self) -> &'static str {
        match self {
            Self::Matched(_) => "matched",
            Self::Missed => "missed",
            Self::Broken(_) => "broken",
        }
    }
}
