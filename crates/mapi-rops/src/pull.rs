//! Read engine: unpacks values from a fixed byte blob
//!
//! A [`RopPull`] walks a cursor over an immutable received buffer. Every
//! access is bounds-checked up front; a failed pull leaves the cursor where
//! it was, and no call can ever read past the end of the blob.

use crate::error::{raise, Result, RopError};
use bytes::Bytes;

/// Read-side marshaling context for a single ROP
///
/// The blob is the exact received payload. The engine never allocates:
/// [`RopPull::pull_bytes`] returns zero-copy views into the blob, and only
/// the string codec copies data out into owned values.
#[derive(Debug)]
pub struct RopPull {
    data: Bytes,
    offset: usize,
}

impl RopPull {
    pub fn new(data: Bytes) -> Self {
        Self { data, offset: 0 }
    }

    /// Bytes consumed so far (the read cursor).
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left between the cursor and the end of the blob.
    #[inline]
    pub fn remaining(&self) -> usize {
        // offset <= data.len() always holds, so this cannot underflow.
        self.data.len() - self.offset
    }

    /// Consume exactly `n` bytes, returning a view into the blob.
    ///
    /// Fails with [`RopError::BufferSize`] when fewer than `n` bytes
    /// remain; the bound is computed by subtraction so the check itself
    /// cannot overflow. Pulling exactly the remaining bytes succeeds.
    pub fn pull_bytes(&mut self, n: usize) -> Result<Bytes> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(raise(
                RopError::BufferSize {
                    requested: n,
                    available: remaining,
                },
                "pull_bytes",
            ));
        }
        let view = self.data.slice(self.offset..self.offset + n);
        self.offset += n;
        Ok(view)
    }

    /// Consume `N` bytes into a fixed array.
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        let view = self.pull_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&view);
        Ok(out)
    }

    #[inline]
    pub fn pull_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    #[inline]
    pub fn pull_i8(&mut self) -> Result<i8> {
        Ok(self.take::<1>()?[0] as i8)
    }

    #[inline]
    pub fn pull_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.take()?))
    }

    #[inline]
    pub fn pull_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.take()?))
    }

    #[inline]
    pub fn pull_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take()?))
    }

    #[inline]
    pub fn pull_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take()?))
    }

    #[inline]
    pub fn pull_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.take()?))
    }

    #[inline]
    pub fn pull_i64(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.take()?))
    }

    #[inline]
    pub fn pull_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.take()?))
    }
}
