//! Crate-level error type.
//!
//! Each module owns the errors of its own concern; this enum chains them
//! together with the file that was being read or written.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::oto::MalformedEntryError;
use crate::phonemes::ResolutionError;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Failed to read an input file.
    #[error("Failed to read file '{path}': {source}")]
    ReadError { path: PathBuf, source: io::Error },

    /// Failed to write an output file.
    #[error("Failed to write file '{path}': {source}")]
    WriteError { path: PathBuf, source: io::Error },

    /// Configuration or phoneme-group source problem.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The source listing could not be parsed.
    #[error("Malformed sample entry: {0}")]
    MalformedEntry(#[from] MalformedEntryError),

    /// Collision resolution did not reach a usable state.
    #[error("Collision resolution failed: {0}")]
    Resolution(#[from] ResolutionError),
}

impl ConvertError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
