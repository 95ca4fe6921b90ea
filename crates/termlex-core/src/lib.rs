#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for termlex grammars.
//!
//! A grammar is a set of named terms. Each term is an ordered list of
//! phrases, each phrase an ordered list of alternative tokens, and each token
//! a literal, a term reference, or a built-in recognizer with a cardinality.
//! Matching lives in `termlex-lib`; this crate only describes and loads
//! grammars.

mod colors;
pub mod grammar;

pub use colors::Colors;
pub use grammar::{
    Builtin, Cardinality, Diagnostic, DiagnosticKind, Grammar, GrammarError, Phrase, Term, Token,
    TokenKind,
};
