//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! exec and trace accept each other's flags, with the irrelevant ones hidden
//! from `--help`. Every command takes `-v` and `--color`, which drive log
//! output.

use clap::Command;

use super::args::*;

/// Add the match inputs shared by exec and trace.
fn with_match_args(cmd: Command) -> Command {
    cmd.arg(grammar_path_arg())
        .arg(expression_arg())
        .arg(input_path_arg())
        .arg(input_text_arg())
        .arg(format_arg())
        .arg(fuel_arg())
        .arg(recursion_limit_arg())
}

/// Add the logging args every command accepts.
fn with_log_args(cmd: Command, color_visible: bool) -> Command {
    cmd.arg(verbose_arg())
        .arg(color_arg().hide(!color_visible))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("termlex")
        .about("Match text against declarative grammar terms")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
        .subcommand(terms_command())
}

/// Validate a grammar.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a grammar")
        .after_help(
            r#"EXAMPLES:
  termlex check grammar.json            # errors only
  termlex check grammar.yaml --strict   # warnings fail too"#,
        )
        .arg(grammar_path_arg())
        .arg(format_arg())
        .arg(strict_arg());

    with_log_args(cmd, true)
}

/// Re-emit a grammar in normalized form.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Print the normalized grammar")
        .after_help(
            r#"EXAMPLES:
  termlex dump grammar.yaml                       # normalized JSON
  termlex dump grammar.json -o grammar.bin --binary  # compact binary form"#,
        )
        .arg(grammar_path_arg())
        .arg(format_arg())
        .arg(output_file_arg())
        .arg(binary_arg());

    with_log_args(cmd, false)
}

/// Match input against an expression and output JSON.
///
/// Accepts trace flags for unified CLI experience, but ignores them.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Match input against an expression and output JSON")
        .override_usage(
            "\
  termlex exec <GRAMMAR> <EXPR> <INPUT>
  termlex exec <GRAMMAR> <EXPR> -i <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  termlex exec grammar.json '$assign' input.txt   # input from file
  termlex exec grammar.json '$assign' -i 'x = 1'  # inline input
  echo 'x = 1' | termlex exec grammar.json '$assign' -

Exits with status 1 when the input does not match."#,
        )
        .arg(compact_arg());

    with_log_args(with_match_args(cmd).arg(no_result_arg().hide(true)), true)
}

/// Trace a match for debugging.
///
/// Accepts exec output flags for unified CLI experience, but ignores them.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace term attempts of a match for debugging")
        .override_usage(
            "\
  termlex trace <GRAMMAR> <EXPR> <INPUT>
  termlex trace <GRAMMAR> <EXPR> -i <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  termlex trace grammar.json '$assign' -i 'x = 1'
  termlex trace grammar.json '$assign' -i 'x = 1' --no-result"#,
        )
        .arg(no_result_arg());

    with_log_args(with_match_args(cmd).arg(compact_arg().hide(true)), true)
}

/// List term names.
pub fn terms_command() -> Command {
    let cmd = Command::new("terms")
        .about("List terms in definition order")
        .arg(grammar_path_arg())
        .arg(format_arg());

    with_log_args(cmd, false)
}
