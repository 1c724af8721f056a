//! Primitive field decoding over fixed-size record buffers.
//!
//! Records are packed: each field starts where the previous one ended and
//! there is no alignment padding. [`FieldCursor`] walks a record in
//! declaration order and [`FieldWriter`] builds one the same way.

use crate::types::{ByteOrder, SectionIndex};

/// Sequential reader over one record buffer.
///
/// Record buffers are sized by the caller's constant, so a cursor running off
/// the end is a layout bug rather than bad input and panics.
pub struct FieldCursor<'a> {
    data: &'a [u8],
    offset: usize,
    order: ByteOrder,
}

impl<'a> FieldCursor<'a> {
    /// Start at offset 0 of `data`.
    #[must_use]
    pub fn new(data: &'a [u8], order: ByteOrder) -> Self {
        Self {
            data,
            offset: 0,
            order,
        }
    }

    /// Offset of the next field within the record.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Next `N` raw bytes.
    pub fn bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.offset..self.offset + N]);
        self.offset += N;
        out
    }

    /// Next 16-bit unsigned integer.
    pub fn u16(&mut self) -> u16 {
        self.order.u16_from(self.bytes())
    }

    /// Next 32-bit unsigned integer.
    pub fn u32(&mut self) -> u32 {
        self.order.u32_from(self.bytes())
    }

    /// Next 32-bit section number.
    pub fn section(&mut self) -> SectionIndex {
        SectionIndex(self.u32())
    }

    /// Next `N` consecutive section numbers, in file order.
    pub fn sections<const N: usize>(&mut self) -> [SectionIndex; N] {
        std::array::from_fn(|_| self.section())
    }
}

/// Sequential writer filling one record buffer.
pub struct FieldWriter<const N: usize> {
    buf: [u8; N],
    offset: usize,
    order: ByteOrder,
}

impl<const N: usize> FieldWriter<N> {
    /// Start with a zeroed record.
    #[must_use]
    pub fn new(order: ByteOrder) -> Self {
        Self {
            buf: [0u8; N],
            offset: 0,
            order,
        }
    }

    /// Append raw bytes.
    pub fn bytes(&mut self, value: &[u8]) -> &mut Self {
        self.buf[self.offset..self.offset + value.len()].copy_from_slice(value);
        self.offset += value.len();
        self
    }

    /// Append a 16-bit unsigned integer.
    pub fn u16(&mut self, value: u16) -> &mut Self {
        let encoded = self.order.u16_to(value);
        self.bytes(&encoded)
    }

    /// Append a 32-bit unsigned integer.
    pub fn u32(&mut self, value: u32) -> &mut Self {
        let encoded = self.order.u32_to(value);
        self.bytes(&encoded)
    }

    /// Append section numbers in order.
    pub fn sections(&mut self, values: &[SectionIndex]) -> &mut Self {
        for value in values {
            self.u32(value.raw());
        }
        self
    }

    /// The finished record.
    #[must_use]
    pub fn finish(self) -> [u8; N] {
        debug_assert_eq!(self.offset, N, "record not fully written");
        self.buf
    }
}
