//! Errors that can occur during matching.
//!
//! A non-match is not an error; these only report exhausted limits.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many token attempts).
    #[error("match execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (terms nested too deeply, or left-recursive).
    #[error("match recursion limit exceeded")]
    RecursionLimitExceeded,
}
