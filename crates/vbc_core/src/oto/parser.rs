//! Source listing parser.
//!
//! # Format Overview
//!
//! One sample per line:
//! ```text
//! _ka.wav=ka,120.0,80.0,-300.0,60.0,20.0
//! ```
//! The part before `=` is the audio reference. After it come the label
//! (possibly with a pitch suffix) and five numbers: left boundary,
//! consonant length, right-edge offset, preutterance, overlap.

use super::error::MalformedEntryError;
use super::suffix::SuffixSet;
use super::types::{SampleEntry, SourceTiming};

/// Fields expected after the `=` separator.
const FIELD_COUNT: usize = 6;

/// Names of the numeric fields, in listing order.
const TIMING_FIELDS: [&str; 5] = ["left", "consonant", "right", "preutterance", "overlap"];

/// Parse listing content into sample entries.
///
/// Blank lines are skipped. The first malformed line aborts parsing.
pub fn parse_oto(content: &str, suffixes: &SuffixSet) -> Result<Vec<SampleEntry>, MalformedEntryError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut entries = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        entries.push(parse_line(line, line_num, suffixes)?);
    }

    Ok(entries)
}

/// Parse a single non-blank line.
fn parse_line(line: &str, line_num: usize, suffixes: &SuffixSet) -> Result<SampleEntry, MalformedEntryError> {
    let (wav, params) = line
        .split_once('=')
        .ok_or_else(|| MalformedEntryError::MissingSeparator {
            line: line_num,
            content: line.to_string(),
        })?;

    let fields: Vec<&str> = params.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(MalformedEntryError::FieldCount {
            line: line_num,
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let mut values = [0.0f64; 5];
    for (slot, (field, raw)) in values
        .iter_mut()
        .zip(TIMING_FIELDS.iter().zip(&fields[1..]))
    {
        *slot = parse_number(raw)
            .ok_or_else(|| MalformedEntryError::invalid_number(line_num, *field, *raw))?;
    }

    let (label, suffix) = suffixes.strip(fields[0]);
    let timing = SourceTiming::new(values[0], values[1], values[2], values[3], values[4]);

    let mut entry = SampleEntry::new(wav, label, timing).at_line(line_num);
    if let Some(suffix) = suffix {
        entry = entry.with_suffix(suffix);
    }
    Ok(entry)
}

/// Parse a timing value, rejecting NaN and infinities.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
