pub mod check;
pub mod dump;
pub mod exec;
pub mod grammar_loader;
pub mod run_common;
pub mod terms;
pub mod trace;

#[cfg(test)]
mod run_common_tests;
