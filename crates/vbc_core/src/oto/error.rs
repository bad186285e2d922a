//! Sample listing error types.

/// A source listing line that cannot be trusted.
///
/// Any one of these aborts the whole run; a partially parsed listing is
/// never converted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedEntryError {
    /// No `=` between the sample name and the parameters.
    #[error("line {line}: missing '=' after the sample name: '{content}'")]
    MissingSeparator { line: usize, content: String },

    /// Wrong number of comma-separated parameters.
    #[error("line {line}: expected {expected} comma-separated fields after '=', found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A timing parameter that is not a finite number.
    #[error("line {line}: {field} value '{value}' is not a number")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl MalformedEntryError {
    /// Line number (1-based) the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingSeparator { line, .. }
            | Self::FieldCount { line, .. }
            | Self::InvalidNumber { line, .. } => *line,
        }
    }

    /// Create an invalid number error.
    pub fn invalid_number(line: usize, field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            line,
            field,
            value: value.into(),
        }
    }
}
