//! Label classification.
//!
//! Every source label is one of four shapes:
//!
//! | Shape      | Source       | Target    |
//! |------------|--------------|-----------|
//! | leading    | `- か`       | `" k"`    |
//! | trailing   | `a R`        | `"a "`    |
//! | transition | `a k`        | `"a k"`   |
//! | bare       | `か`         | `"k a"`   |
//!
//! Trailing and transition samples are also reused for every alias of their
//! symbols, so a voicebank recorded before a collision was resolved still
//! covers the renamed phonemes.

use std::fmt;

use serde::Serialize;

use crate::oto::SampleEntry;
use crate::phonemes::PhonemeInventory;

use super::coverage::CoverageTracker;
use super::report::{DiagnosticReport, UnconvertedEntry, UnconvertedReason};
use super::timing::{convert_timing, TargetTiming};

/// Shape of a source label, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelShape<'a> {
    /// `begin_sign + " " + label`
    Leading(&'a str),
    /// `... vowel + " " + end_sign`; only the token before the sign counts.
    Trailing(&'a str),
    /// Exactly two non-empty tokens, `vowel + " " + consonant`.
    Transition(&'a str, &'a str),
    /// No separator at all.
    Bare(&'a str),
    Unrecognised,
}

impl<'a> LabelShape<'a> {
    /// Classify `label`. Shapes are tried in table order.
    pub fn parse(label: &'a str, begin_sign: &str, end_sign: &str) -> Self {
        if let Some(inner) = label
            .strip_prefix(begin_sign)
            .and_then(|rest| rest.strip_prefix(' '))
        {
            return LabelShape::Leading(inner);
        }

        if let Some(rest) = label
            .strip_suffix(end_sign)
            .and_then(|rest| rest.strip_suffix(' '))
        {
            return match rest.rsplit(' ').next() {
                Some(vowel) if !vowel.is_empty() => LabelShape::Trailing(vowel),
                _ => LabelShape::Unrecognised,
            };
        }

        if label.contains(' ') {
            let mut tokens = label.split(' ');
            return match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(vowel), Some(consonant), None) if !vowel.is_empty() && !consonant.is_empty() => {
                    LabelShape::Transition(vowel, consonant)
                }
                _ => LabelShape::Unrecognised,
            };
        }

        if label.is_empty() {
            LabelShape::Unrecognised
        } else {
            LabelShape::Bare(label)
        }
    }
}

/// Where a target entry takes its audio from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleRef {
    /// The source sample's own audio file.
    Original(String),
    /// The audio of another target entry, by phoneme.
    Reuse(String),
}

/// Renders as the listing reference: the file name, or `#` + phoneme.
impl fmt::Display for SampleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleRef::Original(wav) => write!(f, "{}", wav),
            SampleRef::Reuse(phoneme) => write!(f, "#{}", phoneme),
        }
    }
}

/// One line of the target listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetEntry {
    pub phoneme: String,
    pub reference: SampleRef,
    pub timing: TargetTiming,
}

impl TargetEntry {
    fn original(phoneme: String, entry: &SampleEntry, timing: TargetTiming) -> Self {
        Self {
            phoneme,
            reference: SampleRef::Original(entry.wav().to_string()),
            timing,
        }
    }

    fn reuse(phoneme: String, primary: &str, timing: TargetTiming) -> Self {
        Self {
            phoneme,
            reference: SampleRef::Reuse(primary.to_string()),
            timing,
        }
    }
}

/// Output of one classification run.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub entries: Vec<TargetEntry>,
    pub report: DiagnosticReport,
}

/// Converts source samples to target entries against a resolved inventory.
pub struct AlienClassifier<'a> {
    begin_sign: String,
    end_sign: String,
    inventory: &'a PhonemeInventory,
}

impl<'a> AlienClassifier<'a> {
    pub fn new(
        begin_sign: impl Into<String>,
        end_sign: impl Into<String>,
        inventory: &'a PhonemeInventory,
    ) -> Self {
        Self {
            begin_sign: begin_sign.into(),
            end_sign: end_sign.into(),
            inventory,
        }
    }

    /// Classify every sample in order.
    ///
    /// Takes the coverage tracker by value; its residue ends up in the
    /// report. Running twice on the same inputs gives the same result.
    pub fn convert(&self, samples: &[SampleEntry], mut coverage: CoverageTracker) -> Conversion {
        let mut entries = Vec::new();
        let mut unconverted = Vec::new();

        for (index, sample) in samples.iter().enumerate() {
            if let Err(reason) = self.classify(sample, &mut entries, &mut coverage) {
                tracing::warn!(
                    "Sample {} (line {}) '{}' not converted: {}",
                    index,
                    sample.line(),
                    sample.label(),
                    reason
                );
                unconverted.push(UnconvertedEntry {
                    index,
                    reason,
                    entry: sample.clone(),
                });
            }
        }

        tracing::info!(
            "Converted {} samples into {} entries, {} not converted",
            samples.len(),
            entries.len(),
            unconverted.len()
        );

        let report = DiagnosticReport::new(samples.len(), entries.len(), unconverted, coverage);
        Conversion { entries, report }
    }

    fn classify(
        &self,
        sample: &SampleEntry,
        out: &mut Vec<TargetEntry>,
        coverage: &mut CoverageTracker,
    ) -> Result<(), UnconvertedReason> {
        let timing = convert_timing(sample.timing());

        match LabelShape::parse(sample.label(), &self.begin_sign, &self.end_sign) {
            LabelShape::Leading(inner) => self.leading(inner, sample, timing, out, coverage),
            LabelShape::Trailing(vowel) => {
                self.trailing(vowel, sample, timing, out, coverage);
                Ok(())
            }
            LabelShape::Transition(vowel, consonant) => {
                self.transition(vowel, consonant, sample, timing, out, coverage)
            }
            LabelShape::Bare(label) => self.bare(label, sample, timing, out, coverage),
            LabelShape::Unrecognised => Err(UnconvertedReason::UnrecognisedShape),
        }
    }

    fn leading(
        &self,
        inner: &str,
        sample: &SampleEntry,
        timing: TargetTiming,
        out: &mut Vec<TargetEntry>,
        coverage: &mut CoverageTracker,
    ) -> Result<(), UnconvertedReason> {
        let consonant = &self
            .inventory
            .table
            .canonical(inner)
            .ok_or(UnconvertedReason::UnknownLabel)?
            .consonant;

        if !coverage.requires_leading(consonant) {
            tracing::debug!("Leading '{}' already covered, '{}' skipped", consonant, sample.label());
            return Ok(());
        }

        coverage.satisfy_leading(consonant);
        out.push(TargetEntry::original(format!(" {}", consonant), sample, timing));
        Ok(())
    }

    fn trailing(
        &self,
        vowel: &str,
        sample: &SampleEntry,
        timing: TargetTiming,
        out: &mut Vec<TargetEntry>,
        coverage: &mut CoverageTracker,
    ) {
        let primary = format!("{} ", vowel);
        coverage.satisfy_trailing(vowel);
        out.push(TargetEntry::original(primary.clone(), sample, timing));

        for alias in self.inventory.aliases.vowels.aliases_of(vowel) {
            coverage.satisfy_trailing(alias);
            out.push(TargetEntry::reuse(format!("{} ", alias), &primary, timing));
        }
    }

    fn transition(
        &self,
        vowel: &str,
        consonant: &str,
        sample: &SampleEntry,
        timing: TargetTiming,
        out: &mut Vec<TargetEntry>,
        coverage: &mut CoverageTracker,
    ) -> Result<(), UnconvertedReason> {
        // `a あ` is a vowel-to-vowel transition; `a か` is a context sample.
        let consonant = match self.inventory.table.canonical(consonant) {
            Some(pair) if pair.is_self_mapped() => pair.vowel.as_str(),
            Some(_) => return Err(UnconvertedReason::AsymmetricContext),
            None => consonant,
        };

        let primary = format!("{} {}", vowel, consonant);
        coverage.satisfy_vc(vowel, consonant);
        out.push(TargetEntry::original(primary.clone(), sample, timing));

        let aliases = &self.inventory.aliases;
        let mut reuse = |v: &str, c: &str| {
            coverage.satisfy_vc(v, c);
            out.push(TargetEntry::reuse(format!("{} {}", v, c), &primary, timing));
        };

        for alias_v in aliases.vowels.aliases_of(vowel) {
            reuse(alias_v, consonant);
        }
        for alias_c in aliases.consonants.aliases_of(consonant) {
            reuse(vowel, alias_c);
        }
        for alias_v in aliases.vowels.aliases_of(vowel) {
            for alias_c in aliases.consonants.aliases_of(consonant) {
                reuse(alias_v, alias_c);
            }
        }

        Ok(())
    }

    fn bare(
        &self,
        label: &str,
        sample: &SampleEntry,
        timing: TargetTiming,
        out: &mut Vec<TargetEntry>,
        coverage: &mut CoverageTracker,
    ) -> Result<(), UnconvertedReason> {
        let pair = self
            .inventory
            .table
            .canonical(label)
            .ok_or(UnconvertedReason::UnknownLabel)?;

        coverage.satisfy_bare(label);
        out.push(TargetEntry::original(pair.to_string(), sample, timing));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::coverage::VcPair;
    use crate::oto::SourceTiming;
    use crate::phonemes::{PhonemePair, PhonemeTable};

    fn sample(wav: &str, label: &str) -> SampleEntry {
        SampleEntry::new(wav, label, SourceTiming::new(0.0, 10.0, -5.0, 2.0, 3.0))
    }

    fn inventory() -> PhonemeInventory {
        PhonemeInventory::new(PhonemeTable::from_triples(vec![
            ("ka", "k", "a"),
            ("a", "a", "a"),
            ("i", "i", "i"),
            ("ki", "k", "i"),
        ]))
    }

    fn run(inv: &PhonemeInventory, begin: &str, end: &str, samples: &[SampleEntry]) -> Conversion {
        AlienClassifier::new(begin, end, inv).convert(samples, CoverageTracker::from_table(&inv.table))
    }

    fn phonemes(conversion: &Conversion) -> Vec<(&str, String)> {
        conversion
            .entries
            .iter()
            .map(|e| (e.phoneme.as_str(), e.reference.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(LabelShape::parse("- ka", "-", "R"), LabelShape::Leading("ka"));
        assert_eq!(LabelShape::parse("a R", "-", "R"), LabelShape::Trailing("a"));
        assert_eq!(LabelShape::parse("a i R", "-", "R"), LabelShape::Trailing("i"));
        assert_eq!(LabelShape::parse("a  R", "-", "R"), LabelShape::Unrecognised);
        assert_eq!(LabelShape::parse("a k", "-", "R"), LabelShape::Transition("a", "k"));
        assert_eq!(LabelShape::parse("ka", "-", "R"), LabelShape::Bare("ka"));
        assert_eq!(LabelShape::parse("a k i", "-", "R"), LabelShape::Unrecognised);
        assert_eq!(LabelShape::parse("a ", "-", "R"), LabelShape::Unrecognised);
        assert_eq!(LabelShape::parse("", "-", "R"), LabelShape::Unrecognised);
        // Begin sign wins over end sign.
        assert_eq!(LabelShape::parse("- R", "-", "R"), LabelShape::Leading("R"));
    }

    #[test]
    fn test_bare_label() {
        let inv = PhonemeInventory::new(PhonemeTable::from_triples(vec![("ka", "k", "a")]));
        let conversion = run(&inv, "-", "R", &[sample("ka.wav", "ka")]);

        assert_eq!(conversion.entries.len(), 1);
        let entry = &conversion.entries[0];
        assert_eq!(entry.phoneme, "k a");
        assert_eq!(entry.reference, SampleRef::Original("ka.wav".to_string()));
        assert_eq!(entry.timing.values(), [0.0, 2.0, 10.0, 5.0, 3.0]);
        assert!(conversion.report.missing_bare_labels.is_empty());
    }

    #[test]
    fn test_leading_consonant_with_custom_sign() {
        let inv = inventory();
        let conversion = run(&inv, "B", "E", &[sample("b.wav", "B ka"), sample("b2.wav", "B ki")]);

        // Second sample maps to the same consonant and is dropped silently.
        assert_eq!(phonemes(&conversion), vec![(" k", "b.wav".to_string())]);
        assert!(conversion.report.unconverted.is_empty());
        assert!(!conversion.report.missing_leading_consonants.contains("k"));
    }

    #[test]
    fn test_leading_unknown_label() {
        let inv = inventory();
        let conversion = run(&inv, "-", "R", &[sample("x.wav", "- xyz")]);
        assert!(conversion.entries.is_empty());
        assert_eq!(conversion.report.unconverted[0].reason, UnconvertedReason::UnknownLabel);
    }

    #[test]
    fn test_trailing_vowel_with_alias() {
        let mut inv = inventory();
        inv.aliases.vowels.register("a", "a2");

        let conversion = run(&inv, "-", "E", &[sample("a.wav", "a E")]);

        assert_eq!(
            phonemes(&conversion),
            vec![("a ", "a.wav".to_string()), ("a2 ", "#a ".to_string())]
        );
        assert!(!conversion.report.missing_trailing_vowels.contains("a"));
    }

    #[test]
    fn test_trailing_vowel_after_leading_tokens() {
        let inv = inventory();
        let conversion = run(&inv, "-", "R", &[sample("ai.wav", "a i R")]);

        assert_eq!(phonemes(&conversion), vec![("i ", "ai.wav".to_string())]);
        assert_eq!(conversion.report.counts.unconverted, 0);
    }

    #[test]
    fn test_transition_alias_completeness() {
        let mut inv = inventory();
        inv.aliases.vowels.register("a", "a1");
        inv.aliases.vowels.register("a", "a2");
        inv.aliases.consonants.register("k", "g");

        let conversion = run(&inv, "-", "R", &[sample("ak.wav", "a k")]);

        assert_eq!(
            phonemes(&conversion),
            vec![
                ("a k", "ak.wav".to_string()),
                ("a1 k", "#a k".to_string()),
                ("a2 k", "#a k".to_string()),
                ("a g", "#a k".to_string()),
                ("a1 g", "#a k".to_string()),
                ("a2 g", "#a k".to_string()),
            ]
        );
        assert!(!conversion.report.missing_vc_pairs.contains(&VcPair::new("a", "k")));
    }

    #[test]
    fn test_transition_vowel_label_substituted() {
        let inv = inventory();
        let conversion = run(&inv, "-", "R", &[sample("ai.wav", "a i")]);
        assert_eq!(phonemes(&conversion), vec![("a i", "ai.wav".to_string())]);
        assert!(!conversion.report.missing_vc_pairs.contains(&VcPair::new("a", "i")));
    }

    #[test]
    fn test_transition_context_sample_refused() {
        let inv = inventory();
        let conversion = run(&inv, "-", "R", &[sample("aka.wav", "a ka")]);
        assert!(conversion.entries.is_empty());
        assert_eq!(
            conversion.report.unconverted[0].reason,
            UnconvertedReason::AsymmetricContext
        );
    }

    #[test]
    fn test_unknown_bare_label_is_reported_in_place() {
        let inv = inventory();
        let samples = [sample("ka.wav", "ka"), sample("x.wav", "xyz"), sample("a.wav", "a")];
        let conversion = run(&inv, "-", "R", &samples);

        assert_eq!(conversion.entries.len(), 2);
        assert!(conversion.entries.iter().all(|e| e.phoneme != "xyz"));
        assert_eq!(conversion.report.unconverted.len(), 1);
        assert_eq!(conversion.report.unconverted[0].index, 1);
        assert_eq!(conversion.report.unconverted[0].entry.label(), "xyz");
        assert_eq!(conversion.report.counts.samples_read, 3);
    }

    #[test]
    fn test_repeated_samples_emit_every_time() {
        let inv = inventory();
        let conversion = run(&inv, "-", "R", &[sample("1.wav", "ka"), sample("2.wav", "ka")]);
        assert_eq!(conversion.entries.len(), 2);
        assert!(conversion.report.unconverted.is_empty());
    }

    #[test]
    fn test_convert_is_idempotent() {
        let mut inv = inventory();
        inv.aliases.consonants.register("k", "g");
        let samples = [
            sample("1.wav", "- ka"),
            sample("2.wav", "a k"),
            sample("3.wav", "ki"),
            sample("4.wav", "a R"),
            sample("5.wav", "???"),
        ];

        let first = run(&inv, "-", "R", &samples);
        let second = run(&inv, "-", "R", &samples);
        assert_eq!(first, second);
    }

    #[test]
    fn test_renamed_label_uses_canonical_pair() {
        let mut inv = PhonemeInventory::new(PhonemeTable::from_triples(vec![
            ("じ", "j", "i"),
            ("ぢ", "j", "i"),
        ]));
        inv.reassign("ぢ", PhonemePair::new("dj", "i"), &PhonemePair::new("j", "i"));

        let conversion = run(&inv, "-", "R", &[sample("i.wav", "i j")]);

        assert_eq!(
            phonemes(&conversion),
            vec![("i j", "i.wav".to_string()), ("i dj", "#i j".to_string())]
        );
        assert!(conversion.report.missing_vc_pairs.is_empty());
    }
}
