//! Phonetic equivalence classes.
//!
//! When a label is moved off a shared pair, the symbol it left behind gains
//! the new symbol as an alias. Samples recorded for the old symbol are then
//! reused for every alias during classification.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::types::PhonemePair;

/// Canonical symbol → interchangeable symbols.
///
/// A symbol is never registered as its own alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AliasMap {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` under `symbol`.
    ///
    /// Returns false when the pair is a self-reference or already present.
    pub fn register(&mut self, symbol: &str, alias: &str) -> bool {
        if symbol == alias {
            return false;
        }
        self.entries
            .entry(symbol.to_string())
            .or_default()
            .insert(alias.to_string())
    }

    /// Aliases of a symbol, in sorted order.
    pub fn aliases_of<'a>(&'a self, symbol: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .get(symbol)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn contains(&self, symbol: &str, alias: &str) -> bool {
        self.entries
            .get(symbol)
            .is_some_and(|set| set.contains(alias))
    }

    /// Number of symbols with at least one alias.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(symbol, aliases)` in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Consonant and vowel alias maps of one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AliasRegistry {
    pub consonants: AliasMap,
    pub vowels: AliasMap,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register aliases for a pair that replaced `superseded`.
    ///
    /// Each side registers only when its symbol actually changed.
    pub fn record_reassignment(&mut self, superseded: &PhonemePair, assigned: &PhonemePair) {
        if superseded.consonant != assigned.consonant
            && self
                .consonants
                .register(&superseded.consonant, &assigned.consonant)
        {
            tracing::debug!(
                "Consonant alias {} -> {}",
                superseded.consonant,
                assigned.consonant
            );
        }
        if superseded.vowel != assigned.vowel
            && self.vowels.register(&superseded.vowel, &assigned.vowel)
        {
            tracing::debug!("Vowel alias {} -> {}", superseded.vowel, assigned.vowel);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.consonants.is_empty() && self.vowels.is_empty()
    }
}
