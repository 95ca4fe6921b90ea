//! Grammar model for the term matcher.
//!
//! Grammars are loaded from JSON, YAML or XML documents, or from a compact
//! binary form, and are fully validated before they are handed out.

mod binary;
mod diagnostics;
mod document;
mod error;
mod token;
mod types;
mod xml;

#[cfg(test)]
mod binary_tests;
#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
mod document_tests;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{GrammarError, TokenLocation};
pub use token::{BUILTIN_SIGIL, LITERAL_SIGIL, TERM_SIGIL};
pub use types::{Builtin, Cardinality, Grammar, Phrase, Term, Token, TokenKind};
