use std::io::{self, BufRead, Read};

use crate::error::WireError;

/// Upper bound on the up-front allocation for a byte string body.
///
/// Declared lengths come from untrusted input; larger bodies grow the
/// buffer as bytes actually arrive.
const MAX_PREALLOC: usize = 64 * 1024;

/// Byte source with one byte of non-destructive lookahead.
///
/// Wraps any [`BufRead`] (including `&[u8]`) and tracks the absolute
/// offset of the next unconsumed byte. [`peek`](Self::peek) inspects the
/// underlying buffer without consuming, so a reader handed back by
/// [`into_inner`](Self::into_inner) is positioned exactly after the last
/// consumed token.
pub struct ByteReader<R> {
    inner: R,
    offset: usize,
}

impl<R: BufRead> ByteReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Offset of the next unconsumed byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Return the next byte without consuming it, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// [`WireError::Io`] if the underlying reader fails.
    pub fn peek(&mut self) -> Result<Option<u8>, WireError> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Consume and return the next byte.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] at end of input.
    pub fn next_byte(&mut self) -> Result<u8, WireError> {
        let byte = self
            .peek()?
            .ok_or(WireError::UnexpectedEof { offset: self.offset })?;
        self.inner.consume(1);
        self.offset += 1;
        Ok(byte)
    }

    /// Consume bytes up to and including `delimiter`, returning the bytes
    /// before it.
    ///
    /// Returns `Ok(None)` if more than `limit` bytes precede the delimiter;
    /// the scan stops there so a missing delimiter cannot pull in the rest
    /// of the input.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if input ends before the delimiter.
    pub fn read_until(&mut self, delimiter: u8, limit: usize) -> Result<Option<Vec<u8>>, WireError> {
        let mut out = Vec::with_capacity(limit.min(32));
        loop {
            let byte = self.next_byte()?;
            if byte == delimiter {
                return Ok(Some(out));
            }
            if out.len() == limit {
                return Ok(None);
            }
            out.push(byte);
        }
    }

    /// Consume exactly `len` bytes.
    ///
    /// # Errors
    ///
    /// [`WireError::TruncatedContent`] if fewer than `len` bytes remain.
    pub fn read_exact_vec(&mut self, len: usize) -> Result<Vec<u8>, WireError> {
        let start = self.offset;
        let mut out = Vec::with_capacity(len.min(MAX_PREALLOC));
        let read = (&mut self.inner).take(len as u64).read_to_end(&mut out)?;
        self.offset += read;

        if read < len {
            return Err(WireError::TruncatedContent {
                offset: start,
                declared: len,
                available: read,
            });
        }
        Ok(out)
    }
}
