//! Binary serialization for grammars using postcard.

use super::error::GrammarError;
use super::types::Grammar;

impl Grammar {
    /// Deserialize grammar from binary format.
    ///
    /// The decoded grammar is validated like a parsed document.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, GrammarError> {
        let grammar: Self = postcard::from_bytes(bytes).map_err(GrammarError::Binary)?;
        grammar.validate()?;
        Ok(grammar)
    }

    /// Serialize grammar to binary format.
    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }
}
