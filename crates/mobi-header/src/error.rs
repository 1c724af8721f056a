//! Error types for header decoding.

use thiserror::Error;

/// Which fixed-size region a read was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Leading bytes skipped before the PalmDOC header.
    Prefix,
    /// The PalmDOC header.
    PalmHeader,
    /// The MOBI document header.
    DocHeader,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::PalmHeader => write!(f, "PalmDOC header"),
            Self::DocHeader => write!(f, "MOBI header"),
        }
    }
}

/// Errors that can occur when decoding headers.
///
/// Only structural problems are errors. Unusual field values are decoded
/// and returned as data.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The stream ended before a fixed-size record was complete.
    #[error(
        "truncated {record}: needed {expected} bytes, got {available} (stream ended at offset {offset})"
    )]
    Truncated {
        record: RecordKind,
        /// Absolute stream offset reached when input ran out.
        offset: u64,
        expected: usize,
        available: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HeaderError {
    /// Create a Truncated error.
    pub fn truncated(record: RecordKind, offset: u64, expected: usize, available: usize) -> Self {
        Self::Truncated {
            record,
            offset,
            expected,
            available,
        }
    }

    /// Whether this is a Truncated error.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Result type alias for header operations.
pub type Result<T> = std::result::Result<T, HeaderError>;
