//! Non-fatal grammar checks.
//!
//! None of these stop a grammar from loading: references to missing terms
//! and unknown built-ins are ordinary misses at match time. They are still
//! almost always mistakes, so `check` reports them.

use std::fmt;

use crate::Colors;

use super::types::{Grammar, TokenKind};

/// A suspicious construct found in a grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub term: String,
    /// Zero-based phrase index.
    pub phrase: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `$name` where the grammar defines no `name`.
    UndefinedTerm(String),
    /// `!name` where `name` is not a built-in.
    UnknownBuiltin(String),
    /// Phrase without alternatives; the term can never match.
    EmptyPhrase,
}

impl Grammar {
    /// Collect diagnostics in definition order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut found = Vec::new();
        for (name, term) in &self.terms {
            for (phrase_idx, phrase) in term.phrases.iter().enumerate() {
                if phrase.alternatives.is_empty() {
                    found.push(Diagnostic::new(name, phrase_idx, DiagnosticKind::EmptyPhrase));
                }
                for token in &phrase.alternatives {
                    let kind = match &token.kind {
                        TokenKind::Term(target) if !self.terms.contains_key(target) => {
                            DiagnosticKind::UndefinedTerm(target.clone())
                        }
                        TokenKind::UnknownBuiltin(builtin) => {
                            DiagnosticKind::UnknownBuiltin(builtin.clone())
                        }
                        _ => continue,
                    };
                    found.push(Diagnostic::new(name, phrase_idx, kind));
                }
            }
        }
        found
    }
}

impl Diagnostic {
    fn new(term: &str, phrase: usize, kind: DiagnosticKind) -> Self {
        Self {
            term: term.to_owned(),
            phrase,
            kind,
        }
    }

    /// Single-line rendering with optional ANSI colors.
    pub fn render(&self, colors: Colors) -> String {
        format!(
            "{}warning{}: term {}`{}`{}, phrase {}: {}",
            colors.warning,
            colors.reset,
            colors.name,
            self.term,
            colors.reset,
            self.phrase + 1,
            self.kind
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Colors::OFF))
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedTerm(name) => write!(f, "reference to undefined term `{name}`"),
            Self::UnknownBuiltin(name) => write!(f, "unknown built-in `!{name}`"),
            Self::EmptyPhrase => f.write_str("phrase has no alternatives and never matches"),
        }
    }
}
