//! XML grammar documents.
//!
//! ```xml
//! <Syntax>
//!   <Term name="list">
//!     <Phrase>
//!       <Token ident="$item" cardinality="many" separator=","/>
//!     </Phrase>
//!   </Term>
//! </Syntax>
//! ```
//!
//! The root element name is not checked. `cardinality` defaults to `one`;
//! unknown cardinalities are rejected. A repeated term name replaces the
//! earlier definition.

use indexmap::IndexMap;
use serde::Deserialize;

use super::document::{RawCardinality, RawGrammar, RawToken};
use super::error::GrammarError;
use super::types::Grammar;

impl Grammar {
    /// Parse grammar from an XML document.
    pub fn from_xml(xml: &str) -> Result<Self, GrammarError> {
        let doc: XmlGrammar = quick_xml::de::from_str(xml).map_err(GrammarError::Xml)?;
        RawGrammar::from(doc).try_into()
    }
}

#[derive(Debug, Deserialize)]
struct XmlGrammar {
    #[serde(rename = "Term", default)]
    terms: Vec<XmlTerm>,
}

#[derive(Debug, Deserialize)]
struct XmlTerm {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "Phrase", default)]
    phrases: Vec<XmlPhrase>,
}

#[derive(Debug, Deserialize)]
struct XmlPhrase {
    #[serde(rename = "Token", default)]
    alternatives: Vec<XmlToken>,
}

#[derive(Debug, Deserialize)]
struct XmlToken {
    #[serde(rename = "@ident")]
    ident: String,
    #[serde(rename = "@cardinality", default)]
    cardinality: RawCardinality,
    #[serde(rename = "@separator", default)]
    separator: Option<String>,
}

impl From<XmlGrammar> for RawGrammar {
    fn from(doc: XmlGrammar) -> Self {
        let mut terms = IndexMap::with_capacity(doc.terms.len());
        for term in doc.terms {
            let phrases = term
                .phrases
                .into_iter()
                .map(|phrase| {
                    phrase
                        .alternatives
                        .into_iter()
                        .map(|token| RawToken {
                            ident: token.ident,
                            cardinality: token.cardinality,
                            separator: token.separator,
                        })
                        .collect()
                })
                .collect();
            terms.insert(term.name, phrases);
        }
        Self { terms }
    }
}
