//! Phoneme table, collision resolution and alias bookkeeping.
//!
//! # Architecture
//!
//! ```text
//! presamp.ini ─┐                     rename file ──┐
//!              ├─► PhonemeTable ─► PhonemeInventory ─► CollisionResolver ─► classifier
//! built-in  ───┘                         │                 ▲
//!                                        │                 │ DecisionSource
//!                                 AliasRegistry        (terminal / scripted)
//!                                 RenameRecord
//! ```
//!
//! The table is seeded either from a phoneme-group file or from the built-in
//! kana table. Only a seeded-from-file table can carry collisions, so only
//! that path goes through the resolver.

mod aliases;
pub mod builtin;
mod inventory;
pub mod presamp;
pub mod rename;
mod resolver;
mod types;

pub use aliases::{AliasMap, AliasRegistry};
pub use inventory::PhonemeInventory;
pub use rename::{RenameRecord, RenameSeed};
pub use resolver::{
    CollisionResolver, Decision, DecisionSource, ResolutionError, ResolutionOutcome,
    ScriptedDecisions, MAX_ASSIGN_ATTEMPTS,
};
pub use types::{Collision, PhonemeDefinition, PhonemePair, PhonemeTable};
