//! Grammar type definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{GrammarError, TokenLocation};

/// Complete grammar: named terms in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    pub terms: IndexMap<String, Term>,
}

/// Named grammar term.
///
/// Phrases match one after another; whitespace is allowed (not required)
/// before each of them. A term without phrases matches the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub phrases: Vec<Phrase>,
}

/// Ordered alternatives for one position of a term.
///
/// The first alternative that matches is taken; later alternatives are never
/// revisited, even when the choice makes the enclosing term fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub alternatives: Vec<Token>,
}

/// One grammar atom with its repetition policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub cardinality: Cardinality,
}

/// What a token matches. Resolved once from the identifier's sigil.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Exact text.
    Literal(String),
    /// Reference to another term, by name.
    Term(String),
    /// Built-in recognizer.
    Builtin(Builtin),
    /// `!name` where `name` is not a known recognizer. Never matches.
    UnknownBuiltin(String),
}

/// Fixed recognizers that are not defined by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Builtin {
    /// Identifier-like word: `[\p{L}_][\p{L}\p{Nd}_']*`.
    Label,
    /// The whole remaining input, possibly empty.
    Match,
    /// Optionally negative decimal integer.
    Int,
}

/// Repetition policy of a token.
///
/// Repeating policies carry the separator literal expected between items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    One,
    Optional,
    AtLeastOne { separator: String },
    Many { separator: String },
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term, replacing any previous definition with the same name.
    pub fn insert(&mut self, name: impl Into<String>, term: Term) -> Option<Term> {
        self.terms.insert(name.into(), term)
    }

    pub fn get(&self, name: &str) -> Option<&Term> {
        self.terms.get(name)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Reject constructs that can never behave sensibly at match time.
    ///
    /// Documents are checked while they are decoded; this is the same check
    /// for grammars built in code or decoded from the binary form.
    pub fn validate(&self) -> Result<(), GrammarError> {
        self.terms
            .iter()
            .try_for_each(|(name, term)| term.validate(name))
    }
}

impl FromIterator<(String, Term)> for Grammar {
    fn from_iter<I: IntoIterator<Item = (String, Term)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl Term {
    pub fn new(phrases: Vec<Phrase>) -> Self {
        Self { phrases }
    }

    /// Term where every phrase has exactly one alternative.
    pub fn sequence(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            phrases: tokens.into_iter().map(Phrase::single).collect(),
        }
    }

    /// Check the term as it would be registered under `name`.
    ///
    /// Repeating tokens need a separator with a non-whitespace character,
    /// otherwise the repetition cannot advance.
    pub fn validate(&self, name: &str) -> Result<(), GrammarError> {
        for (phrase_idx, phrase) in self.phrases.iter().enumerate() {
            for (alt_idx, token) in phrase.alternatives.iter().enumerate() {
                if let Some(separator) = token.cardinality.separator()
                    && separator.trim().is_empty()
                {
                    return Err(GrammarError::BlankSeparator {
                        location: TokenLocation::new(name, phrase_idx, alt_idx),
                    });
                }
            }
        }
        Ok(())
    }

    /// Every token of every phrase, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.phrases.iter().flat_map(|p| p.alternatives.iter())
    }
}

impl Phrase {
    pub fn new(alternatives: Vec<Token>) -> Self {
        Self { alternatives }
    }

    pub fn single(token: Token) -> Self {
        Self {
            alternatives: vec![token],
        }
    }
}

impl Token {
    /// Token matched exactly once.
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            cardinality: Cardinality::One,
        }
    }

    /// Token from identifier syntax (`$term`, `!builtin`, `@literal`, `literal`).
    pub fn parse(ident: &str) -> Self {
        Self::new(TokenKind::parse(ident))
    }

    pub fn optional(mut self) -> Self {
        self.cardinality = Cardinality::Optional;
        self
    }

    pub fn at_least_one(mut self, separator: impl Into<String>) -> Self {
        self.cardinality = Cardinality::AtLeastOne {
            separator: separator.into(),
        };
        self
    }

    pub fn many(mut self, separator: impl Into<String>) -> Self {
        self.cardinality = Cardinality::Many {
            separator: separator.into(),
        };
        self
    }
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "label" => Some(Self::Label),
            "match" => Some(Self::Match),
            "int" => Some(Self::Int),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Match => "match",
            Self::Int => "int",
        }
    }
}

impl Cardinality {
    /// Separator literal for repeating policies.
    pub fn separator(&self) -> Option<&str> {
        match self {
            Self::One | Self::Optional => None,
            Self::AtLeastOne { separator } | Self::Many { separator } => Some(separator),
        }
    }

    /// Name used in grammar documents.
    pub fn name(&self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Optional => "optional",
            Self::AtLeastOne { .. } => "atLeastOne",
            Self::Many { .. } => "many",
        }
    }
}
