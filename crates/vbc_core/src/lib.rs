//! VBC Core - voicebank label conversion
//!
//! Converts a sample listing with marker-annotated phonetic labels into
//! canonical consonant/vowel phoneme labels with recomputed timing, and
//! reports which required phonemes the voicebank does not cover.
//!
//! This crate contains all conversion logic with zero terminal I/O. Decisions
//! that need a human are asked through [`phonemes::DecisionSource`].

pub mod config;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod export;
pub mod logging;
pub mod oto;
pub mod phonemes;
pub mod pipeline;

pub use error::{ConvertError, ConvertResult};
pub use pipeline::{run, RunSummary};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
