//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same definition is reused across commands with different visibility
//! settings (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar document (positional).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Grammar file (.json, .yaml, .yml, .xml, .bin) or \"-\" for stdin")
}

/// Expression to match (positional).
pub fn expression_arg() -> Arg {
    Arg::new("expression")
        .value_name("EXPR")
        .required(true)
        .help("Expression to match: $term, !builtin or a literal")
}

/// Input file (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Input file to match, or \"-\" for stdin")
}

/// Inline input text (-i/--input).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('i')
        .long("input")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline input text")
}

/// Grammar format override (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .value_parser(["json", "yaml", "xml", "binary"])
        .help("Grammar format (inferred from extension if not specified)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Emit the binary grammar form (--binary).
pub fn binary_arg() -> Arg {
    Arg::new("binary")
        .long("binary")
        .action(ArgAction::SetTrue)
        .requires("output")
        .help("Write the compact binary form (requires --output)")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty when stdout is a TTY)")
}

/// Skip the match result (--no-result).
pub fn no_result_arg() -> Arg {
    Arg::new("no_result")
        .long("no-result")
        .action(ArgAction::SetTrue)
        .help("Skip the match result, show trace events only")
}

/// Log verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log verbosity (-v for debug, -vv for trace)")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Execution fuel limit")
}

/// Nested term limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("256")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting of term references")
}
