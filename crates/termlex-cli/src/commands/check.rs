use std::path::PathBuf;

use termlex_lib::Colors;

use super::grammar_loader::{GrammarFormat, load_grammar};

pub struct CheckArgs {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let colors = Colors::new(args.color);

    let grammar = match load_grammar(&args.grammar_path, args.format) {
        Ok(grammar) => grammar,
        Err(e) => {
            eprintln!("{}error{}: {}", colors.error, colors.reset, e);
            std::process::exit(1);
        }
    };

    let diagnostics = grammar.diagnostics();
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic.render(colors));
    }

    if args.strict && !diagnostics.is_empty() {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
