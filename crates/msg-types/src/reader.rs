//! Reader for fixed width big-endian payload layouts.

use crate::errors::{DecodeError, DecodeResult};

/// Cursor over a payload buffer.
#[derive(Debug)]
pub(crate) struct BufReader<'b> {
    buf: &'b [u8],
    at: usize,
}

impl<'b> BufReader<'b> {
    /// Constructs a new instance starting at the beginning of `buf`.
    ///
    /// Fails with [`DecodeError::TooShort`] if `buf` cannot hold the
    /// `min_len` bytes of required fields.
    pub(crate) fn with_min_len(
        buf: &'b [u8],
        message: &'static str,
        min_len: usize,
    ) -> DecodeResult<Self> {
        if buf.len() < min_len {
            return Err(DecodeError::TooShort {
                message,
                expected: min_len,
                actual: buf.len(),
            });
        }

        Ok(Self { buf, at: 0 })
    }

    /// Returns the total number of remaining bytes that can be read.
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.at
    }

    /// Returns the slice of the remaining unread bytes, which might be empty.
    pub(crate) fn rest(&self) -> &'b [u8] {
        &self.buf[self.at..]
    }

    pub(crate) fn read_bytes(&mut self, n: usize) -> DecodeResult<&'b [u8]> {
        if n > self.remaining() {
            return Err(DecodeError::OverrunInput);
        }

        let out = &self.buf[self.at..self.at + n];
        self.at += n;
        Ok(out)
    }

    pub(crate) fn read_arr<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut arr = [0; N];
        arr.copy_from_slice(self.read_bytes(N)?);
        Ok(arr)
    }

    pub(crate) fn read_u8(&mut self) -> DecodeResult<u8> {
        self.read_arr::<1>().map(|[b]| b)
    }

    pub(crate) fn read_u16(&mut self) -> DecodeResult<u16> {
        self.read_arr().map(u16::from_be_bytes)
    }

    pub(crate) fn read_u64(&mut self) -> DecodeResult<u64> {
        self.read_arr().map(u64::from_be_bytes)
    }

    /// Reads `n` bytes if that many remain.
    pub(crate) fn read_optional(&mut self, n: usize) -> Option<&'b [u8]> {
        self.read_bytes(n).ok()
    }

    /// Reads a big-endian `u64` if eight bytes remain.
    pub(crate) fn read_optional_u64(&mut self) -> Option<u64> {
        self.read_u64().ok()
    }
}
