//! The resolved phoneme state of one conversion run.

use super::aliases::AliasRegistry;
use super::rename::{RenameRecord, RenameSeed};
use super::types::{PhonemePair, PhonemeTable};

/// Phoneme table plus the aliases and renames derived while resolving it.
///
/// Owned by a single run; the classifier only reads it.
#[derive(Debug, Clone, Default)]
pub struct PhonemeInventory {
    pub table: PhonemeTable,
    pub aliases: AliasRegistry,
    pub renames: RenameRecord,
}

impl PhonemeInventory {
    /// Wrap a freshly seeded table with no aliases or renames.
    pub fn new(table: PhonemeTable) -> Self {
        Self {
            table,
            aliases: AliasRegistry::new(),
            renames: RenameRecord::new(),
        }
    }

    /// Move `label` onto `pair`, registering aliases against `superseded`.
    ///
    /// Returns false for an unknown label.
    pub fn reassign(&mut self, label: &str, pair: PhonemePair, superseded: &PhonemePair) -> bool {
        if self.table.set_canonical(label, pair.clone()).is_none() {
            return false;
        }
        self.aliases.record_reassignment(superseded, &pair);
        self.renames.record(label, pair);
        true
    }

    /// Replay decisions from an earlier run.
    ///
    /// Aliases register against each label's seeded pair. Seeds naming a
    /// label the table does not know are skipped. Returns how many applied.
    pub fn apply_seeds(&mut self, seeds: &[RenameSeed]) -> usize {
        let mut applied = 0;
        for seed in seeds {
            let Some(raw) = self.table.get(&seed.label).map(|def| def.raw().clone()) else {
                tracing::warn!("Rename entry for unknown label '{}' skipped", seed.label);
                continue;
            };
            self.reassign(&seed.label, seed.pair.clone(), &raw);
            applied += 1;
        }
        applied
    }
}
