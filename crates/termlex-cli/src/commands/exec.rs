use std::path::PathBuf;

use termlex_lib::{MatchLimits, Matcher};

use super::grammar_loader::GrammarFormat;
use super::run_common::{self, MatchInput, PreparedMatch};

pub struct ExecArgs {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
    pub expression: String,
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub pretty: bool,
    pub limits: MatchLimits,
}

pub fn run(args: ExecArgs) {
    let PreparedMatch { registry, input } = run_common::prepare_match(MatchInput {
        grammar_path: &args.grammar_path,
        format: args.format,
        input_path: args.input_path.as_deref(),
        input_text: args.input_text.as_deref(),
    });

    let matcher = Matcher::new(&registry).with_limits(args.limits);
    let result = matcher
        .match_str(&input, &args.expression)
        .unwrap_or_else(|e| {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        });

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }

    if !result.is_match() {
        std::process::exit(1);
    }
}
