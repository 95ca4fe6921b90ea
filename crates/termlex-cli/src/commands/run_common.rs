//! Shared logic for exec and trace commands.

use std::fmt::Write;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use termlex_lib::{Colors, Match, Registry};

use super::grammar_loader::{GrammarFormat, load_grammar};

pub struct MatchInput<'a> {
    pub grammar_path: &'a Path,
    pub format: Option<GrammarFormat>,
    pub input_path: Option<&'a Path>,
    pub input_text: Option<&'a str>,
}

pub struct PreparedMatch {
    pub registry: Registry,
    pub input: String,
}

/// Load grammar and input, or exit with status 1.
pub fn prepare_match(args: MatchInput<'_>) -> PreparedMatch {
    if let Err(msg) = validate(&args) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    let registry = load_grammar(args.grammar_path, args.format)
        .map_err(|e| e.to_string())
        .and_then(|grammar| Registry::try_from(grammar).map_err(|e| e.to_string()))
        .unwrap_or_else(|msg| {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        });

    let input = load_input(args.input_text, args.input_path).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    PreparedMatch {
        registry,
        input,
    }
}

/// Validate input sources.
pub fn validate(args: &MatchInput<'_>) -> Result<(), &'static str> {
    let Some(input_path) = args.input_path else {
        if args.input_text.is_none() {
            return Err("input is required: use positional argument or -i/--input");
        }
        return Ok(());
    };
    if input_path.as_os_str() == "-" && args.grammar_path.as_os_str() == "-" {
        return Err("grammar and input cannot both be from stdin");
    }
    Ok(())
}

/// Load input from inline text, stdin, or a file.
pub fn load_input(input_text: Option<&str>, input_path: Option<&Path>) -> Result<String, String> {
    if let Some(text) = input_text {
        return Ok(text.to_owned());
    }
    let Some(path) = input_path else {
        return Err("input is required: use positional argument or -i/--input".to_owned());
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

/// Human-readable match summary used by trace.
pub fn render_match(result: &Match<'_>, colors: Colors) -> String {
    let mut out = String::new();
    if result.is_match() {
        writeln!(
            out,
            "{}matched{} {}({} bytes){}",
            colors.capture,
            colors.reset,
            colors.dim,
            result.consumed(),
            colors.reset
        )
        .unwrap();
    } else {
        writeln!(out, "{}no match{}", colors.error, colors.reset).unwrap();
    }

    let width = result.captures().len().saturating_sub(1).to_string().len();
    for (i, capture) in result.captures().iter().enumerate() {
        writeln!(
            out,
            "  {}{i:w$}{} {}{capture:?}{}",
            colors.dim,
            colors.reset,
            colors.capture,
            colors.reset,
            w = width
        )
        .unwrap();
    }
    out
}
