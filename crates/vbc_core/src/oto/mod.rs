//! Source sample listing (oto.ini).
//!
//! Provides the sample entry types, the line parser and pitch-suffix
//! stripping. A malformed line aborts the whole read.

mod error;
mod parser;
mod suffix;
mod types;

use std::path::Path;

pub use error::MalformedEntryError;
pub use parser::parse_oto;
pub use suffix::SuffixSet;
pub use types::{format_value, SampleEntry, SourceTiming};

use crate::encoding::TextEncoding;
use crate::error::ConvertError;

/// Read and parse a listing file from disk.
pub fn parse_file(
    path: impl AsRef<Path>,
    suffixes: &SuffixSet,
    encoding: TextEncoding,
) -> Result<Vec<SampleEntry>, ConvertError> {
    let path = path.as_ref();

    let content = encoding
        .read_file(path)
        .map_err(|e| ConvertError::read(path, e))?;
    let entries = parse_oto(&content, suffixes)?;

    tracing::info!("Read {} samples from {}", entries.len(), path.display());
    Ok(entries)
}
