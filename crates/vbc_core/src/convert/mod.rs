//! Sample conversion: timing, label classification and coverage.
//!
//! # Pipeline
//!
//! ```text
//! SampleEntry ─► convert_timing ─► LabelShape::parse ─► TargetEntry (+ alias reuse)
//!                                          │
//!                                          ▼
//!                                  CoverageTracker ─► DiagnosticReport
//! ```

mod classifier;
mod coverage;
mod report;
mod timing;

pub use classifier::{AlienClassifier, Conversion, LabelShape, SampleRef, TargetEntry};
pub use coverage::{CoverageTracker, VcPair};
pub use report::{DiagnosticReport, ReportCounts, UnconvertedEntry, UnconvertedReason};
pub use timing::{convert_timing, TargetTiming};
