//! Phoneme dictionary writer.
//!
//! Two lines per label: the label, then `consonant#vowel`. Vowel-only labels
//! drop the consonant and write `#vowel`.

use crate::phonemes::PhonemeTable;

/// Write the table's canonical pairs to dictionary format string.
pub fn render_lsd(table: &PhonemeTable) -> String {
    let mut output = String::new();
    for def in table.iter() {
        let pair = def.canonical();
        output.push_str(def.label());
        output.push('\n');
        if pair.is_self_mapped() {
            output.push_str(&format!("#{}\n", pair.vowel));
        } else {
            output.push_str(&format!("{}#{}\n", pair.consonant, pair.vowel));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonemes::PhonemeInventory;
    use crate::phonemes::PhonemePair;

    #[test]
    fn test_render_lsd() {
        let table = PhonemeTable::from_triples(vec![("あ", "a", "a"), ("か", "k", "a")]);
        assert_eq!(render_lsd(&table), "あ\n#a\nか\nk#a\n");
    }

    #[test]
    fn test_render_lsd_uses_canonical_pair() {
        let mut inv = PhonemeInventory::new(PhonemeTable::from_triples(vec![
            ("じ", "j", "i"),
            ("ぢ", "j", "i"),
        ]));
        inv.reassign("ぢ", PhonemePair::new("dj", "i"), &PhonemePair::new("j", "i"));
        assert_eq!(render_lsd(&inv.table), "じ\nj#i\nぢ\ndj#i\n");
    }
}
