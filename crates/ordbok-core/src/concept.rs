//! Concept table for expanding concept reference items.
//!
//! Concept items (`relation`, `entity`, `grammar`, `rhetoric`, `temporal`,
//! `domain`, `language`) carry an opaque id. The [`ConceptTable`] maps those
//! ids to human-readable expansions. It is loaded once and then shared
//! read-only; callers pass it explicitly to the renderer, so several versions
//! can coexist.
//!
//! # Example
//!
//! ```
//! # use ordbok_core::concept::ConceptTable;
//! let table = ConceptTable::from_json(r#"{"concepts": {"adj": {"expansion": "adjektiv"}}}"#)
//!     .expect("valid concept table");
//!
//! assert_eq!(table.resolve("adj").unwrap(), "adjektiv");
//! assert!(table.resolve("nope").is_err());
//! ```

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// A concept id that is missing from the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown concept id `{id}`")]
pub struct UnknownConcept {
    id: String,
}

impl UnknownConcept {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Returns the id that could not be resolved.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Errors raised while loading a concept table.
#[derive(Debug, Error)]
pub enum ConceptTableError {
    #[error("Failed to parse concept table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single concept entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Concept {
    expansion: String,
}

impl Concept {
    pub fn new(expansion: impl Into<String>) -> Self {
        Self {
            expansion: expansion.into(),
        }
    }

    pub fn expansion(&self) -> &str {
        &self.expansion
    }
}

/// Immutable id → expansion mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConceptTable {
    concepts: HashMap<String, Concept>,
}

impl ConceptTable {
    /// Parses a table from the published JSON layout.
    ///
    /// Only the `concepts` object is read; sibling fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConceptTableError::Parse`] if the text is not valid JSON or
    /// does not match the expected layout.
    pub fn from_json(json: &str) -> Result<Self, ConceptTableError> {
        let table: ConceptTable = serde_json::from_str(json)?;
        debug!(concepts = table.len(); "Concept table loaded");
        Ok(table)
    }

    /// Resolves a concept id to its expansion.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownConcept`] when the id is not in the table.
    pub fn resolve(&self, id: &str) -> Result<&str, UnknownConcept> {
        self.concepts
            .get(id)
            .map(Concept::expansion)
            .ok_or_else(|| UnknownConcept::new(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.concepts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ConceptTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let concepts = iter
            .into_iter()
            .map(|(id, expansion)| (id.into(), Concept::new(expansion)))
            .collect();
        Self { concepts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_ignores_extra_fields() {
        let json = r#"{
            "name": "bm",
            "concepts": {
                "adj": {"expansion": "adjektiv", "class": "grammar"},
                "fam": {"expansion": "familiært"}
            }
        }"#;

        let table = ConceptTable::from_json(json).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("fam").unwrap(), "familiært");
    }

    #[test]
    fn test_from_json_rejects_missing_expansion() {
        let json = r#"{"concepts": {"adj": {}}}"#;
        assert!(matches!(
            ConceptTable::from_json(json),
            Err(ConceptTableError::Parse(_))
        ));
    }

    #[test]
    fn test_resolve_unknown_carries_id() {
        let table: ConceptTable = [("a", "alpha")].into_iter().collect();

        let err = table.resolve("b").unwrap_err();
        assert_eq!(err.id(), "b");
        assert_eq!(err.to_string(), "unknown concept id `b`");
    }

    #[test]
    fn test_tables_are_independent() {
        let old: ConceptTable = [("x", "old")].into_iter().collect();
        let new: ConceptTable = [("x", "new")].into_iter().collect();

        assert_eq!(old.resolve("x").unwrap(), "old");
        assert_eq!(new.resolve("x").unwrap(), "new");
        assert!(ConceptTable::default().is_empty());
    }
}
