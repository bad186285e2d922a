//! Diagnostic report of one conversion.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::oto::SampleEntry;

use super::coverage::{CoverageTracker, VcPair};

/// Why a sample produced no target entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnconvertedReason {
    /// The label (or the label after the begin sign) is not in the table.
    UnknownLabel,
    /// The second token of a transition is a label with distinct consonant
    /// and vowel, i.e. a vowel-consonant-vowel context sample.
    AsymmetricContext,
    /// The label matches none of the four shapes.
    UnrecognisedShape,
}

impl fmt::Display for UnconvertedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnconvertedReason::UnknownLabel => write!(f, "unknown label"),
            UnconvertedReason::AsymmetricContext => write!(f, "context sample"),
            UnconvertedReason::UnrecognisedShape => write!(f, "unrecognised shape"),
        }
    }
}

/// A sample that could not be converted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnconvertedEntry {
    /// Position in the input sequence (0-based).
    pub index: usize,
    pub reason: UnconvertedReason,
    pub entry: SampleEntry,
}

/// Summary counts of a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportCounts {
    pub samples_read: usize,
    pub entries_emitted: usize,
    pub unconverted: usize,
}

/// Unconverted samples plus every requirement left unmet.
///
/// Sections are fixed and always present, in this order: unconverted
/// entries, missing bare labels, missing leading consonants, missing
/// trailing vowels, missing transitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub counts: ReportCounts,
    pub unconverted: Vec<UnconvertedEntry>,
    pub missing_bare_labels: BTreeSet<String>,
    pub missing_leading_consonants: BTreeSet<String>,
    pub missing_trailing_vowels: BTreeSet<String>,
    pub missing_vc_pairs: BTreeSet<VcPair>,
}

impl DiagnosticReport {
    /// Assemble a report from the residual coverage state.
    ///
    /// `unconverted` must already be in input order.
    pub fn new(
        samples_read: usize,
        entries_emitted: usize,
        unconverted: Vec<UnconvertedEntry>,
        coverage: CoverageTracker,
    ) -> Self {
        Self {
            counts: ReportCounts {
                samples_read,
                entries_emitted,
                unconverted: unconverted.len(),
            },
            unconverted,
            missing_bare_labels: coverage.missing_bare_labels().clone(),
            missing_leading_consonants: coverage.missing_leading_consonants().clone(),
            missing_trailing_vowels: coverage.missing_trailing_vowels().clone(),
            missing_vc_pairs: coverage.missing_vc_pairs().clone(),
        }
    }

    /// True when every sample converted and every requirement is met.
    pub fn is_clean(&self) -> bool {
        self.unconverted.is_empty()
            && self.missing_bare_labels.is_empty()
            && self.missing_leading_consonants.is_empty()
            && self.missing_trailing_vowels.is_empty()
            && self.missing_vc_pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oto::SourceTiming;
    use crate::phonemes::PhonemeTable;

    #[test]
    fn test_report_from_coverage() {
        let table = PhonemeTable::from_triples(vec![("か", "k", "a")]);
        let mut coverage = CoverageTracker::from_table(&table);
        coverage.satisfy_bare("か");

        let entry = SampleEntry::new("x.wav", "xyz", SourceTiming::default());
        let report = DiagnosticReport::new(
            2,
            1,
            vec![UnconvertedEntry {
                index: 1,
                reason: UnconvertedReason::UnknownLabel,
                entry,
            }],
            coverage,
        );

        assert_eq!(report.counts.unconverted, 1);
        assert!(report.missing_bare_labels.is_empty());
        assert!(report.missing_leading_consonants.contains("k"));
        assert!(report.missing_vc_pairs.contains(&VcPair::new("a", "k")));
        assert!(!report.is_clean());
    }

    #[test]
    fn test_empty_report_is_clean() {
        assert!(DiagnosticReport::default().is_clean());
    }
}
