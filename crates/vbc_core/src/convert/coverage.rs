//! Required-phoneme coverage.
//!
//! Four sets are built once from the resolved phoneme table and only ever
//! shrink. Whatever is left after classification is reported as missing.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::phonemes::PhonemeTable;

/// A vowel-consonant transition, rendered `"v c"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VcPair {
    pub vowel: String,
    pub consonant: String,
}

impl VcPair {
    pub fn new(vowel: impl Into<String>, consonant: impl Into<String>) -> Self {
        Self {
            vowel: vowel.into(),
            consonant: consonant.into(),
        }
    }
}

impl fmt::Display for VcPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vowel, self.consonant)
    }
}

/// Phoneme shapes still required by the target voicebank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageTracker {
    bare_labels: BTreeSet<String>,
    leading_consonants: BTreeSet<String>,
    trailing_vowels: BTreeSet<String>,
    vc_pairs: BTreeSet<VcPair>,
}

impl CoverageTracker {
    /// Build the required sets from the table's canonical pairs.
    ///
    /// Every canonical consonant is a required leading consonant, every
    /// canonical vowel a required trailing vowel, every vowel × consonant a
    /// required transition and every label a required bare label.
    pub fn from_table(table: &PhonemeTable) -> Self {
        let mut tracker = Self::default();

        for def in table.iter() {
            tracker.bare_labels.insert(def.label().to_string());
            tracker
                .leading_consonants
                .insert(def.canonical().consonant.clone());
            tracker.trailing_vowels.insert(def.canonical().vowel.clone());
        }

        for vowel in &tracker.trailing_vowels {
            for consonant in &tracker.leading_consonants {
                tracker.vc_pairs.insert(VcPair::new(vowel, consonant));
            }
        }

        tracing::debug!(
            "Coverage: {} labels, {} consonants, {} vowels, {} transitions",
            tracker.bare_labels.len(),
            tracker.leading_consonants.len(),
            tracker.trailing_vowels.len(),
            tracker.vc_pairs.len()
        );

        tracker
    }

    /// True while `consonant` still lacks a leading sample.
    pub fn requires_leading(&self, consonant: &str) -> bool {
        self.leading_consonants.contains(consonant)
    }

    /// Mark a bare label as covered. Returns true if it was still required.
    pub fn satisfy_bare(&mut self, label: &str) -> bool {
        self.bare_labels.remove(label)
    }

    pub fn satisfy_leading(&mut self, consonant: &str) -> bool {
        self.leading_consonants.remove(consonant)
    }

    pub fn satisfy_trailing(&mut self, vowel: &str) -> bool {
        self.trailing_vowels.remove(vowel)
    }

    pub fn satisfy_vc(&mut self, vowel: &str, consonant: &str) -> bool {
        self.vc_pairs.remove(&VcPair::new(vowel, consonant))
    }

    pub fn missing_bare_labels(&self) -> &BTreeSet<String> {
        &self.bare_labels
    }

    pub fn missing_leading_consonants(&self) -> &BTreeSet<String> {
        &self.leading_consonants
    }

    pub fn missing_trailing_vowels(&self) -> &BTreeSet<String> {
        &self.trailing_vowels
    }

    pub fn missing_vc_pairs(&self) -> &BTreeSet<VcPair> {
        &self.vc_pairs
    }

    /// Total requirements still unmet across all four sets.
    pub fn remaining(&self) -> usize {
        self.bare_labels.len()
            + self.leading_consonants.len()
            + self.trailing_vowels.len()
            + self.vc_pairs.len()
    }

    /// True once every requirement is met.
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }
}
