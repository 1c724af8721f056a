//! Forward-only byte source for header records.

use std::io::{ErrorKind, Read};

use tracing::trace;

use crate::error::{HeaderError, RecordKind, Result};
use crate::types::{ByteOrder, DecodeOptions};

/// Reads fixed-size records from the front of a stream.
///
/// Wraps any [`Read`] and counts consumed bytes. Bytes are never re-read and
/// the reader never seeks; dropping it does not close the inner source.
pub struct HeaderReader<R: Read> {
    inner: R,
    position: u64,
    options: DecodeOptions,
}

impl<R: Read> HeaderReader<R> {
    /// Create a new reader with default options.
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, DecodeOptions::default())
    }

    /// Create a new reader with options.
    pub fn with_options(inner: R, options: DecodeOptions) -> Self {
        Self {
            inner,
            position: 0,
            options,
        }
    }

    /// Bytes consumed so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Byte order used for every record read through this reader.
    #[must_use]
    pub fn byte_order(&self) -> ByteOrder {
        self.options.byte_order
    }

    /// Read exactly `N` bytes for `record`.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::Truncated`] if the stream ends first. The bytes
    /// that were available are consumed but no partial record is returned.
    pub fn read_record<const N: usize>(&mut self, record: RecordKind) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        let filled = self.fill(&mut buf)?;
        if filled < N {
            return Err(HeaderError::truncated(record, self.position, N, filled));
        }
        trace!(%record, width = N, end = self.position, "read record bytes");
        Ok(buf)
    }

    /// Discard `count` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HeaderError::Truncated`] with [`RecordKind::Prefix`] if the
    /// stream is shorter than `count`.
    pub fn skip(&mut self, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        let copied = std::io::copy(&mut (&mut self.inner).take(count), &mut std::io::sink())?;
        self.position += copied;
        if copied < count {
            return Err(HeaderError::truncated(
                RecordKind::Prefix,
                self.position,
                usize::try_from(count).unwrap_or(usize::MAX),
                usize::try_from(copied).unwrap_or(usize::MAX),
            ));
        }
        trace!(count, "skipped leading bytes");
        Ok(())
    }

    /// Hand back the wrapped source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Fill `buf` as far as the stream allows, returning the count read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    self.position += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(HeaderError::Io(e)),
            }
        }
        Ok(filled)
    }
}
