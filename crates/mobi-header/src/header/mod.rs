//! Header record decoding and building.
//!
//! A MOBI file starts with two fixed-size records:
//! - PalmDOC header (container-level text layout)
//! - MOBI header (document-level metadata and index pointers)

pub mod doc;
pub mod palm;

pub use doc::{
    DOC_HEADER_LEN, DocHeader, DocType, EXTRA_INDEX_COUNT, ExthFlags, LocaleCode, MOBI_IDENTIFIER,
    TextEncoding, UNKNOWN_BYTES_LEN,
};
pub use palm::{Compression, PALM_HEADER_LEN, PalmHeader};
