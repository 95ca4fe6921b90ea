//! termlex: declarative grammar term matcher.
//!
//! # Example
//!
//! ```
//! use termlex_lib::Registry;
//!
//! let mut registry = Registry::new();
//! registry
//!     .load_json(r#"{
//!         "terms": {
//!             "assign": [[{ "ident": "!label" }], [{ "ident": "=" }], [{ "ident": "!int" }]]
//!         }
//!     }"#)
//!     .expect("valid grammar");
//!
//! let result = registry.match_str("x = -42", "$assign").expect("within limits");
//! assert!(result.is_match());
//! assert_eq!(result.captures(), ["x", "=", "-42"]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;
mod registry;
mod shared;

#[cfg(test)]
mod shared_tests;

pub use engine::{Match, MatchLimits, Matcher, RuntimeError};
pub use registry::Registry;
pub use shared::SharedRegistry;
pub use termlex_core::{
    Builtin, Cardinality, Colors, Diagnostic, DiagnosticKind, Grammar, GrammarError, Phrase, Term,
    Token, TokenKind,
};

/// Errors from loading a grammar or running a match.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Result type for termlex operations.
pub type Result<T> = std::result::Result<T, Error>;
