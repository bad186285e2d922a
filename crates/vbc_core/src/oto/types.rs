//! Source sample types.
//!
//! Timing values are kept as `f64` exactly as read; nothing is rounded
//! between parsing and writing.

use std::fmt;

use serde::Serialize;

/// The five timing parameters of a source sample, in listing order.
///
/// `right` is measured backward from the end of the audio when negative,
/// following the source convention.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SourceTiming {
    /// Left boundary (offset).
    pub left: f64,
    /// Fixed consonant length.
    pub consonant: f64,
    /// Right-edge offset (cutoff).
    pub right: f64,
    /// Preutterance.
    pub preutterance: f64,
    /// Overlap.
    pub overlap: f64,
}

impl SourceTiming {
    /// Build from values in listing order `(l, con, r, pre, ovl)`.
    pub fn new(left: f64, consonant: f64, right: f64, preutterance: f64, overlap: f64) -> Self {
        Self {
            left,
            consonant,
            right,
            preutterance,
            overlap,
        }
    }

    /// Values in listing order.
    pub fn values(&self) -> [f64; 5] {
        [
            self.left,
            self.consonant,
            self.right,
            self.preutterance,
            self.overlap,
        ]
    }
}

/// One line of the source listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleEntry {
    line: usize,
    wav: String,
    label: String,
    suffix: Option<String>,
    timing: SourceTiming,
}

impl SampleEntry {
    /// Create an entry with no pitch suffix and no source line.
    pub fn new(wav: impl Into<String>, label: impl Into<String>, timing: SourceTiming) -> Self {
        Self {
            line: 0,
            wav: wav.into(),
            label: label.into(),
            suffix: None,
            timing,
        }
    }

    /// Attach the pitch suffix stripped from the label.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Record the 1-based listing line this entry came from.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Listing line (1-based), 0 when built in memory.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Sample audio reference.
    pub fn wav(&self) -> &str {
        &self.wav
    }

    /// Label with any pitch suffix removed.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Pitch suffix removed from the label, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Timing parameters.
    pub fn timing(&self) -> &SourceTiming {
        &self.timing
    }
}

/// Renders the entry back in listing form.
impl fmt::Display for SampleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}{}",
            self.wav,
            self.label,
            self.suffix.as_deref().unwrap_or("")
        )?;
        for value in self.timing.values() {
            write!(f, ",{}", format_value(value))?;
        }
        Ok(())
    }
}

/// Format a timing value for text output.
///
/// Integral values keep one decimal place (`10.0`); everything else uses the
/// shortest representation that reads back to the same `f64`.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
