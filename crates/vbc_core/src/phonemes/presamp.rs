//! Phoneme-group source parser (presamp.ini).
//!
//! # Format Overview
//!
//! ```text
//! [VOWEL]
//! a=a=あ,か,さ=100
//! i=i=い,き,し=100
//! [CONSONANT]
//! k=か,き=0
//! s=さ=0
//! sh=し=0
//! ```
//!
//! `[VOWEL]` lines are `symbol=name=labels=volume`, `[CONSONANT]` lines are
//! `symbol=labels=flag`. Every other section is ignored. A label's raw pair
//! is its consonant symbol and its vowel symbol; labels that only appear in
//! a vowel group map to the vowel on both sides.

use std::collections::HashMap;
use std::path::Path;

use crate::config::ConfigError;
use crate::encoding::TextEncoding;

use super::types::{PhonemePair, PhonemeTable};

const VOWEL_SECTION: &str = "VOWEL";
const CONSONANT_SECTION: &str = "CONSONANT";

/// Read and parse a phoneme-group file.
pub fn load_file(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<PhonemeTable, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = encoding.read_file(path)?;
    let table = parse_presamp(&content, path)?;

    tracing::info!(
        "Loaded {} phoneme definitions from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Symbol → labels assignments of one section, in file order.
#[derive(Default)]
struct Groups {
    seen: bool,
    order: Vec<String>,
    symbol_of: HashMap<String, String>,
}

impl Groups {
    fn assign(&mut self, label: &str, symbol: &str) {
        if !self.symbol_of.contains_key(label) {
            self.order.push(label.to_string());
        }
        self.symbol_of.insert(label.to_string(), symbol.to_string());
    }
}

/// Parse phoneme-group content. `path` is used for error messages only.
pub fn parse_presamp(content: &str, path: &Path) -> Result<PhonemeTable, ConfigError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut vowels = Groups::default();
    let mut consonants = Groups::default();
    let mut section = String::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = line[1..line.len() - 1].trim().to_ascii_uppercase();
            match section.as_str() {
                VOWEL_SECTION => vowels.seen = true,
                CONSONANT_SECTION => consonants.seen = true,
                _ => {}
            }
            continue;
        }

        let (groups, label_field) = match section.as_str() {
            VOWEL_SECTION => (&mut vowels, 2),
            CONSONANT_SECTION => (&mut consonants, 1),
            _ => continue,
        };

        let parts: Vec<&str> = line.split('=').collect();
        if parts.len() <= label_field {
            return Err(ConfigError::invalid_line(
                path,
                line_num,
                format!("[{}] entry needs at least {} '='-separated fields", section, label_field + 1),
            ));
        }

        let symbol = parts[0].trim();
        if symbol.is_empty() {
            return Err(ConfigError::invalid_line(path, line_num, "empty group symbol"));
        }

        for label in parts[label_field].split(',').map(str::trim).filter(|l| !l.is_empty()) {
            groups.assign(label, symbol);
        }
    }

    if !vowels.seen {
        return Err(ConfigError::missing_section(path, VOWEL_SECTION));
    }
    if !consonants.seen {
        return Err(ConfigError::missing_section(path, CONSONANT_SECTION));
    }

    Ok(build_table(&vowels, &consonants))
}

fn build_table(vowels: &Groups, consonants: &Groups) -> PhonemeTable {
    let mut table = PhonemeTable::new();

    for label in &consonants.order {
        let consonant = &consonants.symbol_of[label];
        match vowels.symbol_of.get(label) {
            Some(vowel) => {
                table.insert(label.as_str(), PhonemePair::new(consonant.as_str(), vowel.as_str()));
            }
            None => {
                tracing::warn!("Label '{}' has consonant '{}' but no vowel group, skipped", label, consonant);
            }
        }
    }

    for label in &vowels.order {
        if !consonants.symbol_of.contains_key(label) {
            let vowel = &vowels.symbol_of[label];
            table.insert(label.as_str(), PhonemePair::new(vowel.as_str(), vowel.as_str()));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "[VERSION]\n1.7\n[VOWEL]\na=a=あ,か,さ,じゃ=100\ni=i=い,き,し,じ,ぢ=100\n[PRIORITY]\nk,s\n[CONSONANT]\nk=か,き=0\ns=さ=0\nsh=し=0\nj=じゃ,じ,ぢ=1\n";

    fn parse(content: &str) -> Result<PhonemeTable, ConfigError> {
        parse_presamp(content, Path::new("presamp.ini"))
    }

    #[test]
    fn test_parse_pairs() {
        let table = parse(SAMPLE).unwrap();

        assert_eq!(table.canonical("か"), Some(&PhonemePair::new("k", "a")));
        assert_eq!(table.canonical("し"), Some(&PhonemePair::new("sh", "i")));
        assert_eq!(table.canonical("じゃ"), Some(&PhonemePair::new("j", "a")));
        assert_eq!(table.canonical("ぢ"), Some(&PhonemePair::new("j", "i")));
    }

    #[test]
    fn test_vowel_only_labels_self_map() {
        let table = parse(SAMPLE).unwrap();
        assert_eq!(table.canonical("あ"), Some(&PhonemePair::new("a", "a")));
        assert_eq!(table.canonical("い"), Some(&PhonemePair::new("i", "i")));
    }

    #[test]
    fn test_order_consonant_labels_first() {
        let table = parse(SAMPLE).unwrap();
        let labels: Vec<&str> = table.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["か", "き", "さ", "し", "じゃ", "じ", "ぢ", "あ", "い"]);
    }

    #[test]
    fn test_consonant_without_vowel_is_skipped() {
        let table = parse("[VOWEL]\na=a=か=100\n[CONSONANT]\nk=か,きゅ=0\n").unwrap();
        assert!(table.contains("か"));
        assert!(!table.contains("きゅ"));
    }

    #[test]
    fn test_missing_sections() {
        let err = parse("[VOWEL]\na=a=あ=100\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingSection { ref section, .. } if section == "CONSONANT"));

        let err = parse("[CONSONANT]\nk=か=0\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingSection { ref section, .. } if section == "VOWEL"));
    }

    #[test]
    fn test_short_vowel_line_is_invalid() {
        let err = parse("[VOWEL]\na=あ\n[CONSONANT]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLine { line: 2, .. }));
    }

    #[test]
    fn test_load_file_not_found() {
        let err = load_file("/nonexistent/presamp.ini", TextEncoding::default()).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load_file(file.path(), TextEncoding::default()).unwrap();
        assert_eq!(table.len(), 9);
        assert_eq!(table.collisions().len(), 1);
    }

    #[test]
    fn test_load_file_shift_jis() {
        let sjis = TextEncoding::from_label("shift_jis").unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&sjis.encode(SAMPLE)).unwrap();

        let table = load_file(file.path(), sjis).unwrap();
        assert_eq!(table.len(), 9);
        assert_eq!(table.canonical("じゃ"), Some(&PhonemePair::new("j", "a")));

        let err = load_file(file.path(), TextEncoding::default()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
