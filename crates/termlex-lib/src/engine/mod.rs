//! Matching engine.
//!
//! The engine walks a term's phrases against an immutable input, threading
//! byte offsets through return values. Whitespace is skipped before every
//! token attempt.

mod builtins;
mod cardinality;
mod error;
mod limits;
mod matcher;
mod outcome;

#[cfg(test)]
mod builtins_tests;

pub use error::RuntimeError;
pub use limits::MatchLimits;
pub use matcher::Matcher;
pub use outcome::Match;
