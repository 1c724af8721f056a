//! Decoder options.

use serde::Serialize;

/// Byte order applied to every multi-byte integer of a decode call.
///
/// A single order covers both records; the decoder never inspects the data
/// to guess one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first (default).
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Decode a `u16` from two bytes.
    #[must_use]
    pub const fn u16_from(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }

    /// Decode a `u32` from four bytes.
    #[must_use]
    pub const fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }

    /// Encode a `u16`.
    #[must_use]
    pub const fn u16_to(self, value: u16) -> [u8; 2] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }

    /// Encode a `u32`.
    #[must_use]
    pub const fn u32_to(self, value: u32) -> [u8; 4] {
        match self {
            Self::Little => value.to_le_bytes(),
            Self::Big => value.to_be_bytes(),
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Little => write!(f, "little-endian"),
            Self::Big => write!(f, "big-endian"),
        }
    }
}

/// Options for decoding headers.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// Byte order for both records (default: little-endian).
    pub byte_order: ByteOrder,
}

impl DecodeOptions {
    /// Create decode options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the byte order.
    #[must_use]
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }
}
