//! Registry shared between threads that also reload it.

use std::sync::{Arc, PoisonError, RwLock};

use termlex_core::{Grammar, GrammarError, Term};

use crate::registry::Registry;

/// Snapshot-swapping registry handle.
///
/// Readers take an `Arc` snapshot and match against it without holding the
/// lock. Writers build the complete replacement first and swap it in under
/// the write lock, so a reader sees either the old rule set or the new one,
/// never a mix.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    current: RwLock<Arc<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// Current rule set. Later writes do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<Registry> {
        // Writers only ever store a finished registry, so a poisoned lock
        // still holds a consistent value.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swap in a new rule set.
    pub fn replace(&self, registry: Registry) {
        let registry = Arc::new(registry);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = registry;
    }

    /// Validate, then swap. On error the current rule set stays.
    pub fn load(&self, grammar: Grammar) -> Result<(), GrammarError> {
        self.replace(Registry::try_from(grammar)?);
        Ok(())
    }

    pub fn load_json(&self, json: &str) -> Result<(), GrammarError> {
        self.load(Grammar::from_json(json)?)
    }

    pub fn load_yaml(&self, yaml: &str) -> Result<(), GrammarError> {
        self.load(Grammar::from_yaml(yaml)?)
    }

    pub fn load_xml(&self, xml: &str) -> Result<(), GrammarError> {
        self.load(Grammar::from_xml(xml)?)
    }

    pub fn load_binary(&self, bytes: &[u8]) -> Result<(), GrammarError> {
        self.load(Grammar::from_binary(bytes)?)
    }

    /// Copy-on-write insert of a single term. An invalid term leaves the
    /// current rule set in place.
    pub fn add_term(&self, name: impl Into<String>, term: Term) -> Result<(), GrammarError> {
        let name = name.into();
        term.validate(&name)?;
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut *current).add_term(name, term)
    }

    pub fn clear(&self) {
        self.replace(Registry::new());
    }
}
