//! Grammar documents (JSON and YAML; XML lives in `xml.rs`).
//!
//! JSON and YAML share one shape: an ordered map of term names, each term a
//! list of phrases, each phrase a list of alternative tokens.
//!
//! ```json
//! { "terms": { "list": [[{ "ident": "$item", "cardinality": "many", "separator": "," }]] } }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{GrammarError, TokenLocation};
use super::types::{Cardinality, Grammar, Phrase, Term, Token, TokenKind};

impl Grammar {
    /// Parse grammar from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json).map_err(GrammarError::Json)?;
        raw.try_into()
    }

    /// Parse grammar from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_yaml::from_str(yaml).map_err(GrammarError::Yaml)?;
        raw.try_into()
    }

    /// Render as a JSON document accepted by [`Grammar::from_json`].
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&RawGrammar::from(self))
            .expect("document serialization should not fail")
    }
}

/// Raw grammar structure matching the document format.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawGrammar {
    #[serde(default)]
    pub(super) terms: IndexMap<String, Vec<Vec<RawToken>>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawToken {
    pub(super) ident: String,
    #[serde(default, skip_serializing_if = "RawCardinality::is_one")]
    pub(super) cardinality: RawCardinality,
    /// Only read for repeating cardinalities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) separator: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) enum RawCardinality {
    #[default]
    One,
    Optional,
    AtLeastOne,
    Many,
}

impl RawCardinality {
    fn is_one(&self) -> bool {
        *self == Self::One
    }

    fn name(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Optional => "optional",
            Self::AtLeastOne => "atLeastOne",
            Self::Many => "many",
        }
    }
}

impl TryFrom<RawGrammar> for Grammar {
    type Error = GrammarError;

    fn try_from(raw: RawGrammar) -> Result<Self, Self::Error> {
        // Everything is converted before anything is returned, so callers
        // either get the complete grammar or nothing.
        let mut terms = IndexMap::with_capacity(raw.terms.len());
        for (name, phrases) in raw.terms {
            let term = convert_term(&name, phrases)?;
            terms.insert(name, term);
        }
        let grammar = Grammar { terms };
        grammar.validate()?;
        Ok(grammar)
    }
}

fn convert_term(name: &str, phrases: Vec<Vec<RawToken>>) -> Result<Term, GrammarError> {
    let phrases = phrases
        .into_iter()
        .enumerate()
        .map(|(phrase_idx, alternatives)| {
            let alternatives = alternatives
                .into_iter()
                .enumerate()
                .map(|(alt_idx, raw)| {
                    convert_token(raw, || TokenLocation::new(name, phrase_idx, alt_idx))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Phrase::new(alternatives))
        })
        .collect::<Result<Vec<_>, GrammarError>>()?;
    Ok(Term::new(phrases))
}

fn convert_token(
    raw: RawToken,
    location: impl FnOnce() -> TokenLocation,
) -> Result<Token, GrammarError> {
    let kind = TokenKind::parse(&raw.ident);
    let cardinality = match (raw.cardinality, raw.separator) {
        (RawCardinality::One, _) => Cardinality::One,
        (RawCardinality::Optional, _) => Cardinality::Optional,
        (RawCardinality::AtLeastOne, Some(separator)) => Cardinality::AtLeastOne { separator },
        (RawCardinality::Many, Some(separator)) => Cardinality::Many { separator },
        (repeating, None) => {
            return Err(GrammarError::MissingSeparator {
                location: location(),
                cardinality: repeating.name(),
            });
        }
    };
    Ok(Token { kind, cardinality })
}

impl From<&Grammar> for RawGrammar {
    fn from(grammar: &Grammar) -> Self {
        let terms = grammar
            .terms
            .iter()
            .map(|(name, term)| {
                let phrases = term
                    .phrases
                    .iter()
                    .map(|phrase| phrase.alternatives.iter().map(RawToken::from).collect())
                    .collect();
                (name.clone(), phrases)
            })
            .collect();
        Self { terms }
    }
}

impl From<&Token> for RawToken {
    fn from(token: &Token) -> Self {
        let cardinality = match token.cardinality {
            Cardinality::One => RawCardinality::One,
            Cardinality::Optional => RawCardinality::Optional,
            Cardinality::AtLeastOne { .. } => RawCardinality::AtLeastOne,
            Cardinality::Many { .. } => RawCardinality::Many,
        };
        Self {
            ident: token.kind.to_string(),
            cardinality,
            separator: token.cardinality.separator().map(str::to_owned),
        }
    }
}
