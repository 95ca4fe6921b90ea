//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use termlex_lib::MatchLimits;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::grammar_loader::GrammarFormat;
use crate::commands::terms::TermsArgs;
use crate::commands::trace::TraceArgs;
use crate::logging::LogArgs;

pub struct LogParams {
    pub verbose: u8,
    pub trace: bool,
    pub color: ColorChoice,
}

impl LogParams {
    pub fn from_matches(command: &str, m: &ArgMatches) -> Self {
        Self {
            verbose: m.get_count("verbose"),
            trace: command == "trace",
            color: parse_color(m),
        }
    }
}

impl From<LogParams> for LogArgs {
    fn from(p: LogParams) -> Self {
        Self {
            verbosity: p.verbose,
            trace_engine: p.trace,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: parse_grammar_path(m),
            format: parse_format(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            format: p.format,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
    pub output: Option<PathBuf>,
    pub binary: bool,
    // Note: verbose and color are only used for logging
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: parse_grammar_path(m),
            format: parse_format(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            binary: m.get_flag("binary"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            format: p.format,
            output: p.output,
            binary: p.binary,
        }
    }
}

pub struct TermsParams {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
}

impl TermsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: parse_grammar_path(m),
            format: parse_format(m),
        }
    }
}

impl From<TermsParams> for TermsArgs {
    fn from(p: TermsParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            format: p.format,
        }
    }
}

pub struct ExecParams {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
    pub expression: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub compact: bool,
    pub fuel: u32,
    pub recursion_limit: u32,
    // Note: no_result is parsed but not extracted (unified flags)
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Input
            grammar_path: parse_grammar_path(m),
            format: parse_format(m),
            expression: parse_expression(m),
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),

            // Output options
            compact: m.get_flag("compact"),

            // Limits
            fuel: parse_fuel(m),
            recursion_limit: parse_recursion_limit(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            grammar_path: p.grammar_path,
            format: p.format,
            expression: p.expression,
            input_path: p.input_path,
            input_text: p.input_text,
            pretty,
            limits: MatchLimits::new()
                .with_exec_fuel(p.fuel)
                .with_recursion_limit(p.recursion_limit),
        }
    }
}

pub struct TraceParams {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
    pub expression: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub no_result: bool,
    pub fuel: u32,
    pub recursion_limit: u32,
    pub color: ColorChoice,
    // Note: compact is parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Input
            grammar_path: parse_grammar_path(m),
            format: parse_format(m),
            expression: parse_expression(m),
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),

            // Trace options
            no_result: m.get_flag("no_result"),
            fuel: parse_fuel(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            format: p.format,
            expression: p.expression,
            input_path: p.input_path,
            input_text: p.input_text,
            no_result: p.no_result,
            limits: MatchLimits::new()
                .with_exec_fuel(p.fuel)
                .with_recursion_limit(p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

/// The grammar positional is required, so clap guarantees it is present.
fn parse_grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_expression(m: &ArgMatches) -> String {
    m.get_one::<String>("expression")
        .cloned()
        .unwrap_or_default()
}

/// Parse --format flag. Absent means "infer from the file extension".
fn parse_format(m: &ArgMatches) -> Option<GrammarFormat> {
    m.get_one::<String>("format")
        .and_then(|name| GrammarFormat::from_name(name))
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel")
        .copied()
        .unwrap_or_else(|| MatchLimits::default().exec_fuel())
}

fn parse_recursion_limit(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("recursion_limit")
        .copied()
        .unwrap_or_else(|| MatchLimits::default().recursion_limit())
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
