//! Pitch suffix stripping.
//!
//! Multi-pitch voicebanks append a note name to every label (`kaA#4`). The
//! suffix is split off before classification and kept on the entry.

/// Note names, in chromatic order starting from A.
const NOTE_NAMES: [&str; 12] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Highest octave number recognised in a pitch suffix.
const MAX_OCTAVE: u32 = 10;

/// Set of label suffixes to strip, matched longest first.
#[derive(Debug, Clone)]
pub struct SuffixSet {
    suffixes: Vec<String>,
}

impl SuffixSet {
    /// Note-name suffixes only (`A0` .. `G#10`).
    pub fn pitch_names() -> Self {
        Self::with_custom(std::iter::empty::<String>())
    }

    /// Note-name suffixes plus the given custom suffixes.
    ///
    /// Empty custom suffixes are ignored.
    pub fn with_custom<I, S>(custom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut suffixes: Vec<String> = NOTE_NAMES
            .iter()
            .flat_map(|note| (0..=MAX_OCTAVE).map(move |octave| format!("{}{}", note, octave)))
            .collect();

        suffixes.extend(custom.into_iter().map(Into::into).filter(|s| !s.is_empty()));

        suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        suffixes.dedup();

        Self { suffixes }
    }

    /// Number of suffixes in the set.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// True when the set holds no suffixes.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Split the longest matching suffix off a label.
    ///
    /// A label that would become empty is returned unchanged with no suffix.
    pub fn strip<'a>(&self, label: &'a str) -> (&'a str, Option<&'a str>) {
        for suffix in &self.suffixes {
            if label.len() > suffix.len() && label.ends_with(suffix.as_str()) {
                let cut = label.len() - suffix.len();
                return (&label[..cut], Some(&label[cut..]));
            }
        }
        (label, None)
    }
}

impl Default for SuffixSet {
    fn default() -> Self {
        Self::pitch_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_names_cover_all_octaves() {
        let set = SuffixSet::pitch_names();
        assert_eq!(set.len(), 12 * 11);
        assert_eq!(set.strip("kaG#10"), ("ka", Some("G#10")));
        assert_eq!(set.strip("kaA0"), ("ka", Some("A0")));
    }

    #[test]
    fn longest_suffix_wins() {
        let set = SuffixSet::pitch_names();
        // G#10 beats G#1, C#4 beats any shorter tail.
        assert_eq!(set.strip("kaC#4"), ("ka", Some("C#4")));
        assert_eq!(set.strip("kaG#10"), ("ka", Some("G#10")));
        assert_eq!(set.strip("kaG#1"), ("ka", Some("G#1")));
    }

    #[test]
    fn unmatched_label_is_untouched() {
        let set = SuffixSet::pitch_names();
        assert_eq!(set.strip("ka"), ("ka", None));
        assert_eq!(set.strip("a R"), ("a R", None));
    }

    #[test]
    fn label_made_only_of_suffix_is_kept() {
        let set = SuffixSet::pitch_names();
        assert_eq!(set.strip("C4"), ("C4", None));
    }

    #[test]
    fn custom_suffixes_are_stripped() {
        let set = SuffixSet::with_custom(vec!["_soft", ""]);
        assert_eq!(set.len(), 12 * 11 + 1);
        assert_eq!(set.strip("ka_soft"), ("ka", Some("_soft")));
    }
}
