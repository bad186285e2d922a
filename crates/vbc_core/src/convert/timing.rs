//! Source to target timing conversion.

use serde::Serialize;

use crate::oto::{format_value, SourceTiming};

/// Timing of a target entry, in target field order.
///
/// Every field is an absolute position measured from the start of the
/// audio.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TargetTiming {
    pub left: f64,
    pub preutterance: f64,
    pub consonant: f64,
    pub right: f64,
    pub overlap: f64,
}

impl TargetTiming {
    /// Values in target field order.
    pub fn values(&self) -> [f64; 5] {
        [
            self.left,
            self.preutterance,
            self.consonant,
            self.right,
            self.overlap,
        ]
    }

    /// Comma-joined values as written to the target listing.
    pub fn render(&self) -> String {
        self.values()
            .iter()
            .map(|v| format_value(*v))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Convert source timing to target timing.
///
/// Source offsets are relative to the left boundary; the right edge is
/// measured backward, so it is subtracted.
pub fn convert_timing(source: &SourceTiming) -> TargetTiming {
    let left = source.left;
    TargetTiming {
        left,
        preutterance: left + source.preutterance,
        consonant: left + source.consonant,
        right: left - source.right,
        overlap: left + source.overlap,
    }
}
