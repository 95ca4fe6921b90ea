//! ANSI color codes for terminal output.
//!
//! - Yellow: warnings
//! - Red: errors, failed matches
//! - Blue: term names
//! - Green: captured text, successful matches
//! - Dim: metadata

/// ANSI color palette for CLI output. Standard 16-color codes only.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub error: &'static str,
    pub warning: &'static str,
    pub name: &'static str,
    pub capture: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        error: "\x1b[31m",
        warning: "\x1b[33m",
        name: "\x1b[34m",
        capture: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        error: "",
        warning: "",
        name: "",
        capture: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
