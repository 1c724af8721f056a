//! Library components for the `mobi-inspect` command.

pub mod error;
pub mod inspect;
pub mod logging;
pub mod report;

pub use error::InspectError;
pub use inspect::{InspectConfig, inspect_file, run};
pub use report::{ReportField, ReportFormat};
