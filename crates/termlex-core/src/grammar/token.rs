//! Identifier syntax for tokens.
//!
//! A leading sigil selects the token kind:
//! - `$name`: term reference
//! - `!name`: built-in recognizer
//! - `@text`: literal, used to match text that starts with a sigil
//! - anything else: literal

use std::fmt;

use super::types::{Builtin, TokenKind};

pub const TERM_SIGIL: char = '$';
pub const BUILTIN_SIGIL: char = '!';
pub const LITERAL_SIGIL: char = '@';

impl TokenKind {
    pub fn parse(ident: &str) -> Self {
        if let Some(name) = ident.strip_prefix(TERM_SIGIL) {
            return Self::Term(name.to_owned());
        }
        if let Some(name) = ident.strip_prefix(BUILTIN_SIGIL) {
            return match Builtin::from_name(name) {
                Some(builtin) => Self::Builtin(builtin),
                None => Self::UnknownBuiltin(name.to_owned()),
            };
        }
        let text = ident.strip_prefix(LITERAL_SIGIL).unwrap_or(ident);
        Self::Literal(text.to_owned())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn term(name: impl Into<String>) -> Self {
        Self::Term(name.into())
    }
}

/// Renders the identifier form; `TokenKind::parse` reads it back.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => {
                if text.starts_with([TERM_SIGIL, BUILTIN_SIGIL, LITERAL_SIGIL]) {
                    write!(f, "{LITERAL_SIGIL}")?;
                }
                f.write_str(text)
            }
            Self::Term(name) => write!(f, "{TERM_SIGIL}{name}"),
            Self::Builtin(builtin) => write!(f, "{BUILTIN_SIGIL}{}", builtin.name()),
            Self::UnknownBuiltin(name) => write!(f, "{BUILTIN_SIGIL}{name}"),
        }
    }
}
