//! MOBI document header record.
//!
//! Immediately follows the PalmDOC header. Decoded as a fixed 168-byte
//! prefix; the record's own `header_length` field is reported but does not
//! change how many bytes are read.
//!
//! # Structure (168 bytes)
//!
//! | Offset  | Length | Field                 |
//! |---------|--------|-----------------------|
//! | 0-3     | 4      | identifier ("MOBI")   |
//! | 4-7     | 4      | header_length         |
//! | 8-11    | 4      | doc_type              |
//! | 12-15   | 4      | text_encoding         |
//! | 16-19   | 4      | unique_id             |
//! | 20-23   | 4      | file_version          |
//! | 24-39   | 16     | orthographic, inflection, names, keys indices |
//! | 40-63   | 24     | extra indices 0-5     |
//! | 64-95   | 32     | first_non_book_index .. first_image_index |
//! | 96-111  | 16     | HUFF/CDIC record and table offsets |
//! | 112-115 | 4      | exth_flags            |
//! | 116-151 | 36     | unknown_bytes         |
//! | 152-167 | 16     | DRM offset, count, size, flags |

use std::io::Read;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{RecordKind, Result};
use crate::layout::{FieldCursor, FieldWriter};
use crate::reader::HeaderReader;
use crate::types::{ByteOrder, SectionIndex};

/// MOBI header length in bytes.
pub const DOC_HEADER_LEN: usize = 168;

/// Expected identifier tag.
pub const MOBI_IDENTIFIER: [u8; 4] = *b"MOBI";

/// Length of the opaque region before the DRM fields.
pub const UNKNOWN_BYTES_LEN: usize = 36;

/// Number of extra index slots.
pub const EXTRA_INDEX_COUNT: usize = 6;

/// Kind of document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocType {
    MobipocketBook,
    PalmDocBook,
    MobigenByKindle,
    Kf8ByKindle,
    News,
    Pics,
    Word,
    Xls,
    Ppt,
    Text,
    Html,
    /// Any other code, kept as stored.
    Unknown(u32),
}

impl DocType {
    /// Map a stored code to a document kind.
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            2 => Self::MobipocketBook,
            3 => Self::PalmDocBook,
            232 => Self::MobigenByKindle,
            248 => Self::Kf8ByKindle,
            257 => Self::News,
            518 => Self::Pics,
            519 => Self::Word,
            520 => Self::Xls,
            521 => Self::Ppt,
            522 => Self::Text,
            523 => Self::Html,
            other => Self::Unknown(other),
        }
    }

    /// The stored code.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::MobipocketBook => 2,
            Self::PalmDocBook => 3,
            Self::MobigenByKindle => 232,
            Self::Kf8ByKindle => 248,
            Self::News => 257,
            Self::Pics => 518,
            Self::Word => 519,
            Self::Xls => 520,
            Self::Ppt => 521,
            Self::Text => 522,
            Self::Html => 523,
            Self::Unknown(code) => code,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MobipocketBook => "Mobipocket Book",
            Self::PalmDocBook => "PalmDOC Book",
            Self::MobigenByKindle => "Mobigen (Kindle)",
            Self::Kf8ByKindle => "KF8 (Kindle)",
            Self::News => "News",
            Self::Pics => "Pics",
            Self::Word => "Word",
            Self::Xls => "XLS",
            Self::Ppt => "PPT",
            Self::Text => "Text",
            Self::Html => "HTML",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Text encoding code page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
    /// Windows-1252.
    Cp1252,
    /// UTF-8.
    Utf8,
    /// Any other code, kept as stored.
    Unknown(u32),
}

impl TextEncoding {
    /// Map a stored code to an encoding.
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            1252 => Self::Cp1252,
            65001 => Self::Utf8,
            other => Self::Unknown(other),
        }
    }

    /// The stored code.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Cp1252 => 1252,
            Self::Utf8 => 65001,
            Self::Unknown(code) => code,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cp1252 => "CP1252",
            Self::Utf8 => "UTF-8",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Windows locale identifier stored in `locale_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocaleCode(pub u32);

impl LocaleCode {
    pub const US_ENGLISH: Self = Self(1033);
    pub const UK_ENGLISH: Self = Self(2057);

    /// Name of a well-known locale.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            1033 => Some("English (US)"),
            2057 => Some("English (UK)"),
            _ => None,
        }
    }
}

impl std::fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// The `exth_flags` bitfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExthFlags(pub u32);

impl ExthFlags {
    /// Bit marking an EXTH block after the MOBI header.
    pub const HAS_EXTH: u32 = 0x40;

    /// Whether an EXTH block follows.
    #[must_use]
    pub const fn has_exth(self) -> bool {
        self.0 & Self::HAS_EXTH != 0
    }
}

impl std::fmt::Display for ExthFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Decoded MOBI header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocHeader {
    #[serde(serialize_with = "serialize_identifier")]
    pub identifier: [u8; 4],
    pub header_length: u32,
    pub doc_type: DocType,
    pub text_encoding: TextEncoding,
    pub unique_id: u32,
    pub file_version: u32,

    pub orthographic_index: SectionIndex,
    pub inflection_index: SectionIndex,
    pub index_names: SectionIndex,
    pub index_keys: SectionIndex,
    pub extra_indices: [SectionIndex; EXTRA_INDEX_COUNT],

    pub first_non_book_index: u32,
    pub full_name_offset: u32,
    pub full_name_length: u32,
    pub locale_code: LocaleCode,
    pub input_language: u32,
    pub output_language: u32,
    pub min_version: u32,
    pub first_image_index: u32,

    /// HUFF/CDIC fields, only meaningful when compression is HUFF/CDIC.
    pub huffman_record_offset: u32,
    pub huffman_record_count: u32,
    pub huffman_table_offset: u32,
    pub huffman_table_length: u32,

    pub exth_flags: ExthFlags,
    /// Opaque; conventionally ends in `FF FF FF FF`.
    #[serde(serialize_with = "serialize_hex")]
    pub unknown_bytes: [u8; UNKNOWN_BYTES_LEN],

    pub drm_offset: u32,
    pub drm_count: u32,
    pub drm_size: u32,
    pub drm_flags: u32,
}

impl DocHeader {
    /// Read the header from the reader's current position.
    ///
    /// The reader must already be past the PalmDOC header. Consumes exactly
    /// [`DOC_HEADER_LEN`] bytes on success.
    ///
    /// # Errors
    ///
    /// Returns a Truncated error carrying the stream offset reached if fewer
    /// bytes remain.
    pub fn decode<R: Read>(reader: &mut HeaderReader<R>) -> Result<Self> {
        let start = reader.position();
        let record = reader.read_record::<DOC_HEADER_LEN>(RecordKind::DocHeader)?;
        let header = Self::parse(&record, reader.byte_order());
        let identifier = header.identifier_str();
        debug!(
            start,
            identifier = %identifier.escape_debug(),
            header_length = header.header_length,
            doc_type = %header.doc_type,
            "decoded MOBI header"
        );
        Ok(header)
    }

    /// Parse a complete record buffer.
    #[must_use]
    pub fn parse(record: &[u8; DOC_HEADER_LEN], order: ByteOrder) -> Self {
        let mut c = FieldCursor::new(record, order);
        let header = Self {
            identifier: c.bytes(),
            header_length: c.u32(),
            doc_type: DocType::from_code(c.u32()),
            text_encoding: TextEncoding::from_code(c.u32()),
            unique_id: c.u32(),
            file_version: c.u32(),
            orthographic_index: c.section(),
            inflection_index: c.section(),
            index_names: c.section(),
            index_keys: c.section(),
            extra_indices: c.sections(),
            first_non_book_index: c.u32(),
            full_name_offset: c.u32(),
            full_name_length: c.u32(),
            locale_code: LocaleCode(c.u32()),
            input_language: c.u32(),
            output_language: c.u32(),
            min_version: c.u32(),
            first_image_index: c.u32(),
            huffman_record_offset: c.u32(),
            huffman_record_count: c.u32(),
            huffman_table_offset: c.u32(),
            huffman_table_length: c.u32(),
            exth_flags: ExthFlags(c.u32()),
            unknown_bytes: c.bytes(),
            drm_offset: c.u32(),
            drm_count: c.u32(),
            drm_size: c.u32(),
            drm_flags: c.u32(),
        };
        debug_assert_eq!(c.offset(), DOC_HEADER_LEN);
        header
    }

    /// Build the record bytes for this header.
    #[must_use]
    pub fn to_bytes(&self, order: ByteOrder) -> [u8; DOC_HEADER_LEN] {
        let mut w = FieldWriter::<DOC_HEADER_LEN>::new(order);
        w.bytes(&self.identifier)
            .u32(self.header_length)
            .u32(self.doc_type.code())
            .u32(self.text_encoding.code())
            .u32(self.unique_id)
            .u32(self.file_version)
            .sections(&[
                self.orthographic_index,
                self.inflection_index,
                self.index_names,
                self.index_keys,
            ])
            .sections(&self.extra_indices)
            .u32(self.first_non_book_index)
            .u32(self.full_name_offset)
            .u32(self.full_name_length)
            .u32(self.locale_code.0)
            .u32(self.input_language)
            .u32(self.output_language)
            .u32(self.min_version)
            .u32(self.first_image_index)
            .u32(self.huffman_record_offset)
            .u32(self.huffman_record_count)
            .u32(self.huffman_table_offset)
            .u32(self.huffman_table_length)
            .u32(self.exth_flags.0)
            .bytes(&self.unknown_bytes)
            .u32(self.drm_offset)
            .u32(self.drm_count)
            .u32(self.drm_size)
            .u32(self.drm_flags);
        w.finish()
    }

    /// Identifier bytes as characters, one per byte, without validation.
    #[must_use]
    pub fn identifier_str(&self) -> String {
        identifier_chars(&self.identifier)
    }

    /// Whether the identifier reads `MOBI`.
    #[must_use]
    pub fn is_mobi(&self) -> bool {
        self.identifier == MOBI_IDENTIFIER
    }

    /// Whether the EXTH flag bit is set.
    #[must_use]
    pub fn has_exth(&self) -> bool {
        self.exth_flags.has_exth()
    }

    /// Whether the stored `header_length` equals the decoded width.
    #[must_use]
    pub fn declared_length_matches(&self) -> bool {
        usize::try_from(self.header_length).is_ok_and(|len| len == DOC_HEADER_LEN)
    }

    /// The four named indices followed by the six extra indices.
    #[must_use]
    pub fn all_indices(&self) -> [SectionIndex; 4 + EXTRA_INDEX_COUNT] {
        let named = [
            self.orthographic_index,
            self.inflection_index,
            self.index_names,
            self.index_keys,
        ];
        std::array::from_fn(|i| {
            if i < named.len() {
                named[i]
            } else {
                self.extra_indices[i - named.len()]
            }
        })
    }
}

fn identifier_chars(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn serialize_identifier<S: Serializer>(
    bytes: &[u8; 4],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&identifier_chars(bytes))
}

fn serialize_hex<S: Serializer>(
    bytes: &[u8; UNKNOWN_BYTES_LEN],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}
