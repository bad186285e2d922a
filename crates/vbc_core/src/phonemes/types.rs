//! Phoneme definition types.
//!
//! A definition keeps the pair its label was seeded with (`raw`) apart from
//! the pair it currently resolves to (`canonical`). Only the canonical pair
//! ever changes, and always as a whole.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A (consonant, vowel) symbol pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhonemePair {
    pub consonant: String,
    pub vowel: String,
}

impl PhonemePair {
    pub fn new(consonant: impl Into<String>, vowel: impl Into<String>) -> Self {
        Self {
            consonant: consonant.into(),
            vowel: vowel.into(),
        }
    }

    /// True when consonant and vowel are the same symbol.
    ///
    /// Vowel-only labels and glides are seeded this way.
    pub fn is_self_mapped(&self) -> bool {
        self.consonant == self.vowel
    }
}

/// Renders as `"consonant vowel"`, the target phoneme form.
impl fmt::Display for PhonemePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.consonant, self.vowel)
    }
}

/// One label of the phoneme table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhonemeDefinition {
    label: String,
    raw: PhonemePair,
    canonical: PhonemePair,
}

impl PhonemeDefinition {
    /// Create a definition whose canonical pair starts equal to the raw pair.
    pub fn new(label: impl Into<String>, raw: PhonemePair) -> Self {
        Self {
            label: label.into(),
            canonical: raw.clone(),
            raw,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Pair assigned by the seed data.
    pub fn raw(&self) -> &PhonemePair {
        &self.raw
    }

    /// Pair the label currently resolves to.
    pub fn canonical(&self) -> &PhonemePair {
        &self.canonical
    }

    /// True once the canonical pair differs from the seeded one.
    pub fn is_renamed(&self) -> bool {
        self.raw != self.canonical
    }
}

/// Labels that currently share one canonical pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    /// The shared pair.
    pub pair: PhonemePair,
    /// Labels holding it, in table order.
    pub labels: Vec<String>,
}

/// Insertion-ordered label → definition table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhonemeTable {
    definitions: Vec<PhonemeDefinition>,
    index: HashMap<String, usize>,
}

impl PhonemeTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(label, consonant, vowel)` triples.
    pub fn from_triples<I, L, C, V>(triples: I) -> Self
    where
        I: IntoIterator<Item = (L, C, V)>,
        L: Into<String>,
        C: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (label, consonant, vowel) in triples {
            table.insert(label, PhonemePair::new(consonant, vowel));
        }
        table
    }

    /// Insert or re-seed a label.
    ///
    /// A label seen before keeps its position; both its raw and canonical
    /// pairs are replaced. Returns true when the label was new.
    pub fn insert(&mut self, label: impl Into<String>, raw: PhonemePair) -> bool {
        let label = label.into();
        if let Some(&idx) = self.index.get(&label) {
            self.definitions[idx] = PhonemeDefinition::new(label, raw);
            return false;
        }
        self.index.insert(label.clone(), self.definitions.len());
        self.definitions.push(PhonemeDefinition::new(label, raw));
        true
    }

    pub fn get(&self, label: &str) -> Option<&PhonemeDefinition> {
        self.index.get(label).map(|&idx| &self.definitions[idx])
    }

    /// Canonical pair of a label.
    pub fn canonical(&self, label: &str) -> Option<&PhonemePair> {
        self.get(label).map(PhonemeDefinition::canonical)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = &PhonemeDefinition> {
        self.definitions.iter()
    }

    /// Overwrite a label's canonical pair, returning the previous one.
    ///
    /// Returns `None` (and changes nothing) for an unknown label.
    pub(crate) fn set_canonical(&mut self, label: &str, pair: PhonemePair) -> Option<PhonemePair> {
        let idx = *self.index.get(label)?;
        Some(std::mem::replace(&mut self.definitions[idx].canonical, pair))
    }

    /// First label other than `label` whose canonical pair is `pair`.
    pub fn holder_other_than(&self, pair: &PhonemePair, label: &str) -> Option<&str> {
        self.definitions
            .iter()
            .find(|def| def.canonical == *pair && def.label != label)
            .map(PhonemeDefinition::label)
    }

    /// Groups of labels sharing a canonical pair, in order of first
    /// appearance.
    pub fn collisions(&self) -> Vec<Collision> {
        let mut groups: Vec<Collision> = Vec::new();
        let mut by_pair: HashMap<&PhonemePair, usize> = HashMap::new();

        for def in &self.definitions {
            match by_pair.get(&def.canonical) {
                Some(&idx) => groups[idx].labels.push(def.label.clone()),
                None => {
                    by_pair.insert(&def.canonical, groups.len());
                    groups.push(Collision {
                        pair: def.canonical.clone(),
                        labels: vec![def.label.clone()],
                    });
                }
            }
        }

        groups.retain(|group| group.labels.len() > 1);
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PhonemeTable {
        PhonemeTable::from_triples(vec![
            ("ka", "k", "a"),
            ("ji", "j", "i"),
            ("a", "a", "a"),
            ("di", "j", "i"),
        ])
    }

    #[test]
    fn test_pair_display() {
        assert_eq!(PhonemePair::new("k", "a").to_string(), "k a");
        assert!(PhonemePair::new("a", "a").is_self_mapped());
        assert!(!PhonemePair::new("k", "a").is_self_mapped());
    }

    #[test]
    fn test_lookup_and_order() {
        let table = sample_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.canonical("ka"), Some(&PhonemePair::new("k", "a")));
        assert!(table.canonical("xyz").is_none());

        let labels: Vec<&str> = table.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["ka", "ji", "a", "di"]);
    }

    #[test]
    fn test_insert_existing_keeps_position() {
        let mut table = sample_table();
        assert!(!table.insert("ka", PhonemePair::new("g", "a")));
        assert_eq!(table.iter().next().unwrap().raw(), &PhonemePair::new("g", "a"));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_collisions_grouped_in_order() {
        let table = sample_table();
        let collisions = table.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].pair, PhonemePair::new("j", "i"));
        assert_eq!(collisions[0].labels, vec!["ji".to_string(), "di".to_string()]);
    }

    #[test]
    fn test_set_canonical_keeps_raw() {
        let mut table = sample_table();
        let previous = table.set_canonical("di", PhonemePair::new("d", "i"));
        assert_eq!(previous, Some(PhonemePair::new("j", "i")));

        let def = table.get("di").unwrap();
        assert_eq!(def.raw(), &PhonemePair::new("j", "i"));
        assert_eq!(def.canonical(), &PhonemePair::new("d", "i"));
        assert!(def.is_renamed());
        assert!(table.collisions().is_empty());
        assert!(table.set_canonical("xyz", PhonemePair::new("x", "y")).is_none());
    }

    #[test]
    fn test_holder_other_than() {
        let table = sample_table();
        let ji = PhonemePair::new("j", "i");
        assert_eq!(table.holder_other_than(&ji, "di"), Some("ji"));
        assert_eq!(table.holder_other_than(&ji, "ji"), Some("di"));
        assert_eq!(table.holder_other_than(&PhonemePair::new("k", "a"), "ka"), None);
    }
}
