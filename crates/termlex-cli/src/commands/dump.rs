use std::fs;
use std::path::{Path, PathBuf};

use super::grammar_loader::{GrammarFormat, load_grammar};

pub struct DumpArgs {
    pub grammar_path: PathBuf,
    pub format: Option<GrammarFormat>,
    pub output: Option<PathBuf>,
    pub binary: bool,
}

pub fn run(args: DumpArgs) {
    let grammar = load_grammar(&args.grammar_path, args.format).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let json = grammar.to_json();
    match (&args.output, args.binary) {
        (Some(path), true) => write_output(path, &grammar.to_binary()),
        (Some(path), false) => write_output(path, format!("{json}\n").as_bytes()),
        // clap rejects --binary without --output
        (None, _) => println!("{}", json),
    }
}

fn write_output(path: &Path, bytes: &[u8]) {
    if let Err(e) = fs::write(path, bytes) {
        eprintln!("error: failed to write '{}': {}", path.display(), e);
        std::process::exit(1);
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "grammar written");
}
