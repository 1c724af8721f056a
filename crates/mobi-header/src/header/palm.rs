//! PalmDOC header record.
//!
//! # Structure (16 bytes)
//!
//! | Offset | Length | Field            | Description                          |
//! |--------|--------|------------------|--------------------------------------|
//! | 0-1    | 2      | compression      | 1=none, 2=PalmDOC, 17480=HUFF/CDIC   |
//! | 2-3    | 2      | reserved         | Always zero                          |
//! | 4-7    | 4      | text_length      | Uncompressed length of the text      |
//! | 8-9    | 2      | record_count     | Number of text records               |
//! | 10-11  | 2      | record_size      | Maximum text record size (4096)      |
//! | 12-15  | 4      | current_position | Reading position in the text         |

use std::io::Read;

use serde::Serialize;
use tracing::debug;

use crate::error::{RecordKind, Result};
use crate::layout::{FieldCursor, FieldWriter};
use crate::reader::HeaderReader;
use crate::types::ByteOrder;

/// PalmDOC header length in bytes.
pub const PALM_HEADER_LEN: usize = 16;

/// Text compression scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Compression {
    /// No compression.
    None,
    /// PalmDOC (LZ77 variant).
    PalmDoc,
    /// HUFF/CDIC.
    HuffmanCdic,
    /// Any other code, kept as stored.
    Unknown(u16),
}

impl Compression {
    /// Map a stored code to a scheme.
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            1 => Self::None,
            2 => Self::PalmDoc,
            17480 => Self::HuffmanCdic,
            other => Self::Unknown(other),
        }
    }

    /// The stored code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::None => 1,
            Self::PalmDoc => 2,
            Self::HuffmanCdic => 17480,
            Self::Unknown(code) => code,
        }
    }

    /// Display name of the scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::PalmDoc => "PalmDOC",
            Self::HuffmanCdic => "HUFF/CDIC",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Decoded PalmDOC header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalmHeader {
    pub compression: Compression,
    pub reserved: u16,
    pub text_length: u32,
    pub record_count: u16,
    pub record_size: u16,
    pub current_position: u32,
}

impl PalmHeader {
    /// Read the header from the reader's current position.
    ///
    /// Consumes exactly [`PALM_HEADER_LEN`] bytes on success.
    ///
    /// # Errors
    ///
    /// Returns a Truncated error if fewer bytes remain.
    pub fn decode<R: Read>(reader: &mut HeaderReader<R>) -> Result<Self> {
        let start = reader.position();
        let record = reader.read_record::<PALM_HEADER_LEN>(RecordKind::PalmHeader)?;
        let header = Self::parse(&record, reader.byte_order());
        debug!(
            start,
            compression = %header.compression,
            text_length = header.text_length,
            record_count = header.record_count,
            "decoded PalmDOC header"
        );
        Ok(header)
    }

    /// Parse a complete record buffer.
    #[must_use]
    pub fn parse(record: &[u8; PALM_HEADER_LEN], order: ByteOrder) -> Self {
        let mut cursor = FieldCursor::new(record, order);
        let header = Self {
            compression: Compression::from_code(cursor.u16()),
            reserved: cursor.u16(),
            text_length: cursor.u32(),
            record_count: cursor.u16(),
            record_size: cursor.u16(),
            current_position: cursor.u32(),
        };
        debug_assert_eq!(cursor.offset(), PALM_HEADER_LEN);
        header
    }

    /// Build the record bytes for this header.
    #[must_use]
    pub fn to_bytes(&self, order: ByteOrder) -> [u8; PALM_HEADER_LEN] {
        let mut writer = FieldWriter::<PALM_HEADER_LEN>::new(order);
        writer
            .u16(self.compression.code())
            .u16(self.reserved)
            .u32(self.text_length)
            .u16(self.record_count)
            .u16(self.record_size)
            .u32(self.current_position);
        writer.finish()
    }
}
