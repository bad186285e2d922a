//! Text encoding of input files.
//!
//! Voicebank files are usually Shift-JIS. Inputs are decoded strictly: a
//! byte sequence that is not valid in the configured encoding is an error,
//! never silently replaced. A byte-order mark overrides the configured
//! encoding.

use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};

use crate::config::ConfigError;

/// Labels accepted besides the WHATWG ones.
fn extra_label(label: &str) -> Option<&'static Encoding> {
    match label.to_ascii_lowercase().as_str() {
        "cp932" => Some(SHIFT_JIS),
        "utf_8" => Some(UTF_8),
        _ => None,
    }
}

/// A resolved text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    /// Resolve an encoding label such as `utf-8`, `shift_jis` or `cp932`.
    pub fn from_label(label: &str) -> Result<Self, ConfigError> {
        let trimmed = label.trim();
        Encoding::for_label(trimmed.as_bytes())
            .or_else(|| extra_label(trimmed))
            .map(Self)
            .ok_or_else(|| ConfigError::UnknownEncoding(label.to_string()))
    }

    /// Canonical name, e.g. `Shift_JIS`.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Decode bytes, failing on any malformed sequence.
    pub fn decode(&self, bytes: &[u8]) -> io::Result<String> {
        let (text, used, had_errors) = self.0.decode(bytes);
        if had_errors {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("stream is not valid {}", used.name()),
            ));
        }
        Ok(text.into_owned())
    }

    /// Encode text for writing. Characters the encoding cannot represent
    /// become numeric character references.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let (bytes, _, unmappable) = self.0.encode(text);
        if unmappable {
            tracing::warn!("Some characters cannot be written as {}", self.name());
        }
        bytes.into_owned()
    }

    /// Read and decode a whole file.
    pub fn read_file(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        self.decode(&bytes)
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self(UTF_8)
    }
}
