//! Errors for the inspection pipeline.

use std::path::PathBuf;

use mobi_header::HeaderError;
use thiserror::Error;

/// A failed inspection step.
///
/// Each variant names the step so the diagnostic says where things stopped.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The input file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Leading bytes could not be skipped.
    #[error("failed to skip leading bytes: {0}")]
    Skip(#[source] HeaderError),

    /// The PalmDOC header could not be read.
    #[error("failed to read PalmDOC header: {0}")]
    ReadPalmHeader(#[source] HeaderError),

    /// The MOBI header could not be read.
    #[error("failed to read MOBI header: {0}")]
    ReadDocHeader(#[source] HeaderError),

    /// The report could not be serialized.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Write(#[source] std::io::Error),
}
