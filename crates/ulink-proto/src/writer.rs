//! Fixed-capacity buffer writer.
//!
//! `BytesMut` grows on demand, which would hide a sizing bug as a silent
//! reallocation. [`HeaderWriter`] pins the capacity at construction and turns
//! any write past it into [`HeaderError::CapacityExceeded`].

use bytes::{BufMut, Bytes, BytesMut};

use crate::errors::{HeaderError, Result};

/// Writer over a buffer of fixed capacity.
#[derive(Debug)]
pub struct HeaderWriter {
    buf: BytesMut,
    capacity: usize,
}

impl HeaderWriter {
    /// Allocate a writer that accepts exactly `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: BytesMut::with_capacity(capacity), capacity }
    }

    /// Next free offset.
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes still writable.
    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Fail unless `needed` more bytes fit.
    pub fn reserve_exact(&self, needed: usize) -> Result<()> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(HeaderError::CapacityExceeded { needed, remaining });
        }
        Ok(())
    }

    /// Write one byte.
    pub fn put_u8(&mut self, value: u8) -> Result<()> {
        self.reserve_exact(1)?;
        self.buf.put_u8(value);
        Ok(())
    }

    /// Write a big-endian u64.
    pub fn put_u64(&mut self, value: u64) -> Result<()> {
        self.reserve_exact(8)?;
        self.buf.put_u64(value);
        Ok(())
    }

    /// Write a byte slice.
    pub fn put_slice(&mut self, src: &[u8]) -> Result<()> {
        self.reserve_exact(src.len())?;
        self.buf.put_slice(src);
        Ok(())
    }

    /// Take the buffer, which must be exactly full.
    pub fn finish(self) -> Result<Bytes> {
        if self.buf.len() != self.capacity {
            return Err(HeaderError::SizeMismatch {
                estimated: self.capacity,
                written: self.buf.len(),
            });
        }
        Ok(self.buf.freeze())
    }
}
