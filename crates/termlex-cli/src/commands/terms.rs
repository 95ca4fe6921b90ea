use std::path::PathBuf;

use super::grammar_loader::{GrammarFormat, load_grammar};

pub struct TermsArgs {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
}

pub fn run(args: TermsArgs) {
    let grammar = load_grammar(&args.grammar_path, args.format).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    for name in grammar.names() {
        println!("{}", name);
    }
}
