//! PalmDOC and MOBI header decoder.
//!
//! Decodes the two fixed-size records at the front of a MOBI e-book into
//! typed fields, without decompressing text or parsing EXTH metadata.
//!
//! Decoding is positional: the PalmDOC header is read first, the MOBI header
//! starts where it ended, and no field value changes how later bytes are
//! read. Unusual values (unknown compression, an identifier other than
//! `MOBI`) are returned as data; only running out of input is an error.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use mobi_header::{DOC_HEADER_LEN, HeaderReader, PALM_HEADER_LEN, read_headers};
//!
//! let mut data = vec![0u8; PALM_HEADER_LEN + DOC_HEADER_LEN];
//! data[0] = 2; // PalmDOC compression
//! data[PALM_HEADER_LEN..PALM_HEADER_LEN + 4].copy_from_slice(b"MOBI");
//!
//! let mut reader = HeaderReader::new(Cursor::new(data));
//! let headers = read_headers(&mut reader).unwrap();
//! assert_eq!(headers.doc.identifier_str(), "MOBI");
//! assert_eq!(reader.position(), (PALM_HEADER_LEN + DOC_HEADER_LEN) as u64);
//! ```

mod error;
pub mod header;
mod layout;
mod reader;
mod types;

use std::io::Read;

use serde::Serialize;

pub use error::{HeaderError, RecordKind, Result};
pub use header::{
    Compression, DOC_HEADER_LEN, DocHeader, DocType, EXTRA_INDEX_COUNT, ExthFlags, LocaleCode,
    MOBI_IDENTIFIER, PALM_HEADER_LEN, PalmHeader, TextEncoding, UNKNOWN_BYTES_LEN,
};
pub use reader::HeaderReader;
pub use types::{ByteOrder, DecodeOptions, INDEX_UNAVAILABLE, SectionIndex};

/// Combined width of both records.
pub const HEADERS_LEN: usize = PALM_HEADER_LEN + DOC_HEADER_LEN;

/// Both decoded records, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobiHeaders {
    pub palm: PalmHeader,
    pub doc: DocHeader,
}

/// Decode the PalmDOC header and then the MOBI header.
///
/// # Errors
///
/// Fails with the first error encountered; if the PalmDOC header is
/// truncated the MOBI header is never attempted.
pub fn read_headers<R: Read>(reader: &mut HeaderReader<R>) -> Result<MobiHeaders> {
    let palm = PalmHeader::decode(reader)?;
    let doc = DocHeader::decode(reader)?;
    Ok(MobiHeaders { palm, doc })
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
