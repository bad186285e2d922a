//! Collision resolution.
//!
//! Labels that share a canonical pair cannot be told apart in the target
//! format. The resolver finds every such group and asks a [`DecisionSource`]
//! which label keeps the pair and what the others become.
//!
//! # Loop
//!
//! Each pass scans the table for collisions and works through them as a
//! queue. A proposed pair that another label already holds is rejected and
//! asked for again. Passes repeat until the table is collision-free, or the
//! decision source accepts the duplicates that remain. A pass that moves
//! nothing after the duplicates were refused ends the run without asking
//! again.

use std::collections::{HashMap, HashSet, VecDeque};

use thiserror::Error;

use super::inventory::PhonemeInventory;
use super::types::{Collision, PhonemePair};

/// Rejected proposals allowed for one label before the run aborts.
pub const MAX_ASSIGN_ATTEMPTS: usize = 8;

/// Answer for one label of a collision group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Leave the label on the shared pair.
    Keep,
    /// Move the label to a new pair.
    Assign(PhonemePair),
}

/// Source of collision decisions.
///
/// Called synchronously; an interactive implementation blocks on the user.
pub trait DecisionSource {
    /// Label that keeps the shared pair. `None`, or a label outside the
    /// group, means the first label.
    fn choose_keeper(&mut self, collision: &Collision) -> Option<String>;

    /// Decide what `label` becomes.
    fn resolve(&mut self, label: &str, collision: &Collision) -> Decision;

    /// A proposed pair was already held by `holder`; `resolve` is asked again.
    fn rejected(&mut self, _label: &str, _pair: &PhonemePair, _holder: &str) {}

    /// Asked after a pass that left collisions behind, unless nothing moved
    /// since the last refusal. `true` ends resolution with the duplicates in
    /// place.
    fn accept_duplicates(&mut self, remaining: &[Collision]) -> bool;
}

/// Errors that abort collision resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// Every proposal for a label clashed with another label.
    #[error("no free pair for '{label}' after {attempts} attempts")]
    AttemptsExhausted { label: String, attempts: usize },

    /// A pass changed nothing and the duplicates were not accepted.
    #[error("{remaining} collisions left unchanged and not accepted")]
    Stalled { remaining: usize },
}

/// Result of a resolution session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionOutcome {
    /// Passes run.
    pub passes: usize,
    /// Labels moved to a new pair.
    pub reassigned: usize,
    /// Collisions accepted as-is.
    pub remaining: Vec<Collision>,
}

impl ResolutionOutcome {
    /// True when no two labels share a pair.
    pub fn is_stable(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Drives a [`DecisionSource`] until the table is stable.
pub struct CollisionResolver<'a, D: DecisionSource + ?Sized> {
    decisions: &'a mut D,
}

impl<'a, D: DecisionSource + ?Sized> CollisionResolver<'a, D> {
    pub fn new(decisions: &'a mut D) -> Self {
        Self { decisions }
    }

    /// Resolve every collision in the inventory's table.
    pub fn resolve(&mut self, inventory: &mut PhonemeInventory) -> Result<ResolutionOutcome, ResolutionError> {
        let mut outcome = ResolutionOutcome::default();
        let mut refused = false;

        loop {
            let collisions = inventory.table.collisions();
            if collisions.is_empty() {
                tracing::info!(
                    "Collision resolution stable after {} passes, {} labels reassigned",
                    outcome.passes,
                    outcome.reassigned
                );
                return Ok(outcome);
            }

            outcome.passes += 1;
            tracing::info!("Resolution pass {}: {} collisions", outcome.passes, collisions.len());

            let moved = self.run_pass(inventory, collisions.into())?;
            outcome.reassigned += moved;

            let remaining = inventory.table.collisions();
            if remaining.is_empty() {
                continue;
            }
            if moved == 0 && refused {
                return Err(ResolutionError::Stalled {
                    remaining: remaining.len(),
                });
            }
            if self.decisions.accept_duplicates(&remaining) {
                tracing::warn!("{} collisions accepted as duplicates", remaining.len());
                outcome.remaining = remaining;
                return Ok(outcome);
            }
            if moved == 0 {
                return Err(ResolutionError::Stalled {
                    remaining: remaining.len(),
                });
            }
            refused = true;
        }
    }

    /// Work through one queue of collisions. Returns labels moved.
    fn run_pass(
        &mut self,
        inventory: &mut PhonemeInventory,
        mut queue: VecDeque<Collision>,
    ) -> Result<usize, ResolutionError> {
        let mut moved = 0;

        while let Some(collision) = queue.pop_front() {
            let keeper = self
                .decisions
                .choose_keeper(&collision)
                .filter(|label| collision.labels.contains(label))
                .unwrap_or_else(|| collision.labels[0].clone());

            tracing::debug!("'{}' keeps [{}]", keeper, collision.pair);

            for label in collision.labels.iter().filter(|l| **l != keeper) {
                if self.resolve_label(inventory, label, &collision)? {
                    moved += 1;
                }
            }
        }

        Ok(moved)
    }

    /// Ask for a pair for one label until a free one is given.
    fn resolve_label(
        &mut self,
        inventory: &mut PhonemeInventory,
        label: &str,
        collision: &Collision,
    ) -> Result<bool, ResolutionError> {
        for _ in 0..MAX_ASSIGN_ATTEMPTS {
            let pair = match self.decisions.resolve(label, collision) {
                Decision::Keep => return Ok(false),
                Decision::Assign(pair) => pair,
            };

            if let Some(holder) = inventory.table.holder_other_than(&pair, label) {
                let holder = holder.to_string();
                tracing::debug!("[{}] for '{}' already held by '{}'", pair, label, holder);
                self.decisions.rejected(label, &pair, &holder);
                continue;
            }

            tracing::info!("'{}' renamed [{}] -> [{}]", label, collision.pair, pair);
            inventory.reassign(label, pair, &collision.pair);
            return Ok(true);
        }

        Err(ResolutionError::AttemptsExhausted {
            label: label.to_string(),
            attempts: MAX_ASSIGN_ATTEMPTS,
        })
    }
}

/// Decisions given up front.
///
/// Labels without a queued assignment are kept. Used by tests and by
/// non-interactive runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    keepers: HashSet<String>,
    assignments: HashMap<String, VecDeque<PhonemePair>>,
    accept: bool,
    rejections: Vec<(String, PhonemePair, String)>,
    accept_requests: usize,
}

impl ScriptedDecisions {
    /// Script that refuses to accept duplicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script that accepts whatever duplicates remain.
    pub fn accepting() -> Self {
        Self {
            accept: true,
            ..Self::default()
        }
    }

    /// Make `label` the keeper of any group it belongs to.
    pub fn keep(mut self, label: impl Into<String>) -> Self {
        self.keepers.insert(label.into());
        self
    }

    /// Queue a proposal for `label`. Proposals are used in order.
    pub fn assign(mut self, label: impl Into<String>, pair: PhonemePair) -> Self {
        self.assignments.entry(label.into()).or_default().push_back(pair);
        self
    }

    /// Proposals that were rejected, as `(label, pair, holder)`.
    pub fn rejections(&self) -> &[(String, PhonemePair, String)] {
        &self.rejections
    }

    /// Times `accept_duplicates` was called.
    pub fn accept_requests(&self) -> usize {
        self.accept_requests
    }
}

impl DecisionSource for ScriptedDecisions {
    fn choose_keeper(&mut self, collision: &Collision) -> Option<String> {
        collision
            .labels
            .iter()
            .find(|label| self.keepers.contains(*label))
            .cloned()
    }

    fn resolve(&mut self, label: &str, _collision: &Collision) -> Decision {
        match self.assignments.get_mut(label).and_then(VecDeque::pop_front) {
            Some(pair) => Decision::Assign(pair),
            None => Decision::Keep,
        }
    }

    fn rejected(&mut self, label: &str, pair: &PhonemePair, holder: &str) {
        self.rejections
            .push((label.to_string(), pair.clone(), holder.to_string()));
    }

    fn accept_duplicates(&mut self, _remaining: &[Collision]) -> bool {
        self.accept_requests += 1;
        self.accept
    }
}
