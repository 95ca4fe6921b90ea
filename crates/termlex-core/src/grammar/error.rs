use std::fmt;

/// Error during grammar loading. The whole document is rejected.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[source] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[source] serde_yaml::Error),

    #[error("XML parse error: {0}")]
    Xml(#[source] quick_xml::DeError),

    #[error("binary decode error: {0}")]
    Binary(#[source] postcard::Error),

    #[error("{location}: `{cardinality}` token requires a separator")]
    MissingSeparator {
        location: TokenLocation,
        cardinality: &'static str,
    },

    #[error("{location}: separator must contain a non-whitespace character")]
    BlankSeparator { location: TokenLocation },
}

/// Position of a token inside a grammar. Indices are zero-based, display is one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLocation {
    pub term: String,
    pub phrase: usize,
    pub alternative: usize,
}

impl TokenLocation {
    pub fn new(term: &str, phrase: usize, alternative: usize) -> Self {
        Self {
            term: term.to_owned(),
            phrase,
            alternative,
        }
    }
}

impl fmt::Display for TokenLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "term `{}`, phrase {}, alternative {}",
            self.term,
            self.phrase + 1,
            self.alternative + 1
        )
    }
}
