//! Trace a match for debugging.
//!
//! Term attempts are logged by the engine at trace level; the logging setup
//! enables them for this command. The match summary follows on stdout.

use std::path::PathBuf;

use termlex_lib::{Colors, MatchLimits, Matcher};

use super::grammar_loader::GrammarFormat;
use super::run_common::{self, MatchInput, PreparedMatch};

pub struct TraceArgs {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
    pub expression: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub no_result: bool,
    pub limits: MatchLimits,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let PreparedMatch { registry, input } = run_common::prepare_match(MatchInput {
        grammar_path: &args.grammar_path,
        format: args.format,
        input_path: args.input_path.as_deref(),
        input_text: args.input_text.as_deref(),
    });

    let matcher = Matcher::new(&registry).with_limits(args.limits);
    let result = match matcher.match_str(&input, &args.expression) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    if !args.no_result {
        let colors = Colors::new(args.color);
        println!("{}---{}", colors.dim, colors.reset);
        print!("{}", run_common::render_match(&result, colors));
    }

    if !result.is_match() {
        std::process::exit(1);
    }
}
