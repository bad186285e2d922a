//! Rename decisions.
//!
//! A rename file holds one `label,consonant,vowel` triple per line. It is
//! read at the start of a run to replay earlier collision decisions without
//! asking again, and written at the end with every label the run renamed.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::config::ConfigError;
use crate::encoding::TextEncoding;

use super::types::PhonemePair;

/// A prior decision: `label` resolves to `pair`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameSeed {
    pub label: String,
    pub pair: PhonemePair,
}

impl RenameSeed {
    pub fn new(label: impl Into<String>, pair: PhonemePair) -> Self {
        Self {
            label: label.into(),
            pair,
        }
    }
}

/// Read and parse a rename file.
pub fn load_file(path: impl AsRef<Path>, encoding: TextEncoding) -> Result<Vec<RenameSeed>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = encoding.read_file(path)?;
    let seeds = parse_rename(&content, path)?;
    tracing::info!("Read {} rename decisions from {}", seeds.len(), path.display());
    Ok(seeds)
}

/// Parse rename content. `path` is used for error messages only.
pub fn parse_rename(content: &str, path: &Path) -> Result<Vec<RenameSeed>, ConfigError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut seeds = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 || fields.iter().any(|f| f.is_empty()) {
            return Err(ConfigError::invalid_line(
                path,
                idx + 1,
                format!("expected 'label,consonant,vowel', got '{}'", line),
            ));
        }

        seeds.push(RenameSeed::new(fields[0], PhonemePair::new(fields[1], fields[2])));
    }

    Ok(seeds)
}

/// Audit trail of renamed labels, ordered by label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameRecord {
    entries: BTreeMap<String, PhonemePair>,
}

impl RenameRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pair a label now resolves to, replacing an earlier entry.
    pub fn record(&mut self, label: impl Into<String>, pair: PhonemePair) {
        self.entries.insert(label.into(), pair);
    }

    pub fn get(&self, label: &str) -> Option<&PhonemePair> {
        self.entries.get(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PhonemePair)> {
        self.entries.iter().map(|(label, pair)| (label.as_str(), pair))
    }

    /// Render in rename-file form, readable by [`parse_rename`].
    pub fn render(&self) -> String {
        let mut output = String::new();
        for (label, pair) in self.iter() {
            output.push_str(&format!("{},{},{}\n", label, pair.consonant, pair.vowel));
        }
        output
    }
}
