//! Term registry.

use indexmap::IndexMap;
use termlex_core::{Grammar, GrammarError, Term};

use crate::engine::{Match, Matcher, RuntimeError};

/// Named terms available to the matcher.
///
/// Mutation needs `&mut Registry` and matching borrows it shared, so a
/// registry never changes under an in-flight match. Loads parse and
/// validate the whole document first and only then replace the current
/// terms; a failed load leaves the registry as it was.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    terms: IndexMap<String, Term>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all terms with those of `grammar`, after validating it.
    pub fn load(&mut self, grammar: Grammar) -> Result<(), GrammarError> {
        grammar.validate()?;
        let previous = self.terms.len();
        self.terms = grammar.terms;
        tracing::debug!(previous, terms = self.terms.len(), "grammar loaded");
        Ok(())
    }

    /// Replace all terms with a JSON grammar document.
    pub fn load_json(&mut self, json: &str) -> Result<(), GrammarError> {
        self.load(Grammar::from_json(json)?)
    }

    /// Replace all terms with a YAML grammar document.
    pub fn load_yaml(&mut self, yaml: &str) -> Result<(), GrammarError> {
        self.load(Grammar::from_yaml(yaml)?)
    }

    /// Replace all terms with an XML grammar document.
    pub fn load_xml(&mut self, xml: &str) -> Result<(), GrammarError> {
        self.load(Grammar::from_xml(xml)?)
    }

    /// Replace all terms with a binary grammar.
    pub fn load_binary(&mut self, bytes: &[u8]) -> Result<(), GrammarError> {
        self.load(Grammar::from_binary(bytes)?)
    }

    /// Insert a term, replacing any term with the same name.
    ///
    /// An invalid term is rejected and the registry is left unchanged.
    pub fn add_term(&mut self, name: impl Into<String>, term: Term) -> Result<(), GrammarError> {
        let name = name.into();
        term.validate(&name)?;
        let replaced = self.terms.insert(name.clone(), term).is_some();
        tracing::debug!(term = %name, replaced, "term added");
        Ok(())
    }

    pub fn clear(&mut self) {
        tracing::debug!(terms = self.terms.len(), "registry cleared");
        self.terms.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Term> {
        self.terms.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.terms.contains_key(name)
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

    /// Copy of the current terms as a grammar.
    pub fn to_grammar(&self) -> Grammar {
        self.terms
            .iter()
            .map(|(name, term)| (name.clone(), term.clone()))
            .collect()
    }

    /// Match with default limits. See [`Matcher::match_str`].
    pub fn match_str<'i>(
        &self,
        input: &'i str,
        expression: &str,
    ) -> Result<Match<'i>, RuntimeError> {
        Matcher::new(self).match_str(input, expression)
    }
}

impl TryFrom<Grammar> for Registry {
    type Error = GrammarError;

    fn try_from(grammar: Grammar) -> Result<Self, Self::Error> {
        grammar.validate()?;
        Ok(Self {
            terms: grammar.terms,
        })
    }
}
