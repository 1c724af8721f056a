//! Shared value types.

mod options;
mod section;

pub use options::{ByteOrder, DecodeOptions};
pub use section::{INDEX_UNAVAILABLE, SectionIndex};
