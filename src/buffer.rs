//! Cursor-based octet buffer
//!
//! A growable byte sequence paired with a read/write position. Reads
//! decode big-endian unsigned integers or raw byte ranges at the cursor
//! and advance it; writes grow the backing store as needed, encode at
//! the cursor, and advance it. The buffer serializes to upper-case hex,
//! which is the canonical textual form for frame logging and matching.

use std::fmt;

use tracing::trace;

use crate::error::{OctetBufferError, Result};

const U8_BYTES: usize = 1;
const U16_BYTES: usize = 2;
const U24_BYTES: usize = 3;
const U32_BYTES: usize = 4;

/// Byte buffer with a shared read/write cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OctetBuffer {
    /// Backing store, replaced wholesale on growth
    store: Vec<u8>,
    /// Cursor offset; may be parked beyond the end by `set_position`
    position: usize,
}

impl OctetBuffer {
    /// Create an empty buffer
    #[inline]
    pub fn new() -> Self {
        Self {
            store: Vec::new(),
            position: 0,
        }
    }

    /// Create a buffer owning the given bytes, cursor at 0
    #[inline]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            store: bytes,
            position: 0,
        }
    }

    /// Create a buffer by decoding a hex string (case-insensitive)
    ///
    /// Odd-length input or a non-hex digit fails with `InvalidArgument`;
    /// nothing is silently truncated.
    pub fn from_hex(input: &str) -> Result<Self> {
        let store = hex::decode(input)?;
        Ok(Self { store, position: 0 })
    }

    /// Total bytes in the backing store
    #[inline]
    pub fn available(&self) -> usize {
        self.store.len()
    }

    /// Bytes left between the cursor and the end of the store
    ///
    /// A cursor parked beyond the end reads as zero remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.store.len().saturating_sub(self.position)
    }

    /// Current cursor offset
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor to an arbitrary offset
    ///
    /// The offset is not bounds-checked; reads from a cursor past the
    /// end fail with `InsufficientBytes`.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Rewind the cursor to 0, leaving the store untouched
    #[inline]
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Get immutable view of the backing store
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.store
    }

    /// Get store length (same as `available`)
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ========================================================================
    // Cursor reads (big-endian)
    // ========================================================================

    /// Read one byte at the cursor
    pub fn read_u8(&mut self) -> Result<u8> {
        self.require("u8", U8_BYTES)?;
        let value = self.store[self.position];
        self.position += U8_BYTES;
        Ok(value)
    }

    /// Read a big-endian u16 at the cursor
    pub fn read_u16(&mut self) -> Result<u16> {
        self.require("u16", U16_BYTES)?;
        let p = self.position;
        let value = u16::from_be_bytes([self.store[p], self.store[p + 1]]);
        self.position += U16_BYTES;
        Ok(value)
    }

    /// Read a big-endian 24-bit unsigned integer at the cursor
    pub fn read_u24(&mut self) -> Result<u32> {
        self.require("u24", U24_BYTES)?;
        let p = self.position;
        let value = (u32::from(self.store[p]) << 16)
            | (u32::from(self.store[p + 1]) << 8)
            | u32::from(self.store[p + 2]);
        self.position += U24_BYTES;
        Ok(value)
    }

    /// Read a big-endian u32 at the cursor
    pub fn read_u32(&mut self) -> Result<u32> {
        self.require("u32", U32_BYTES)?;
        let p = self.position;
        let value = u32::from_be_bytes([
            self.store[p],
            self.store[p + 1],
            self.store[p + 2],
            self.store[p + 3],
        ]);
        self.position += U32_BYTES;
        Ok(value)
    }

    /// Read `count` bytes at the cursor into an owned copy
    ///
    /// The copy never aliases the backing store; later growth is not
    /// observable through it.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.require("bytes", count)?;
        let copy = self.store[self.position..self.position + count].to_vec();
        self.position += count;
        Ok(copy)
    }

    /// Read all bytes left after the cursor
    ///
    /// Always succeeds; returns an empty vector when nothing remains.
    pub fn read_remaining(&mut self) -> Vec<u8> {
        let count = self.remaining();
        let start = self.position.min(self.store.len());
        let copy = self.store[start..start + count].to_vec();
        self.position += count;
        copy
    }

    /// Inspect the byte at the cursor without consuming it
    pub fn peek(&self) -> Result<u8> {
        self.require("u8", U8_BYTES)?;
        Ok(self.store[self.position])
    }

    // ========================================================================
    // Cursor writes (big-endian, growing)
    // ========================================================================

    /// Write the low byte of `value` at the cursor
    ///
    /// Wider input is truncated silently; only the low-order 8 bits are
    /// stored. Callers rely on this for field packing.
    pub fn write_u8(&mut self, value: u32) -> &mut Self {
        self.grow_to_accept(U8_BYTES);
        self.store[self.position] = (value & 0xFF) as u8;
        self.position += U8_BYTES;
        self
    }

    /// Write the low 16 bits of `value` big-endian at the cursor
    pub fn write_u16(&mut self, value: u32) -> &mut Self {
        self.grow_to_accept(U16_BYTES);
        let p = self.position;
        self.store[p] = ((value >> 8) & 0xFF) as u8;
        self.store[p + 1] = (value & 0xFF) as u8;
        self.position += U16_BYTES;
        self
    }

    /// Write the low 24 bits of `value` big-endian at the cursor
    pub fn write_u24(&mut self, value: u32) -> &mut Self {
        self.grow_to_accept(U24_BYTES);
        let p = self.position;
        self.store[p] = ((value >> 16) & 0xFF) as u8;
        self.store[p + 1] = ((value >> 8) & 0xFF) as u8;
        self.store[p + 2] = (value & 0xFF) as u8;
        self.position += U24_BYTES;
        self
    }

    /// Write `value` big-endian at the cursor
    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.grow_to_accept(U32_BYTES);
        let p = self.position;
        self.store[p..p + U32_BYTES].copy_from_slice(&value.to_be_bytes());
        self.position += U32_BYTES;
        self
    }

    /// Write a byte slice at the cursor
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.grow_to_accept(bytes.len());
        self.store[self.position..self.position + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
        self
    }

    /// Decode a hex string (case-insensitive) and write the bytes
    ///
    /// Malformed hex fails with `InvalidArgument` and leaves the buffer
    /// unmodified.
    pub fn write_hex(&mut self, input: &str) -> Result<&mut Self> {
        let bytes = hex::decode(input)?;
        Ok(self.write_bytes(&bytes))
    }

    /// Serialize the entire store as an upper-case hex string
    ///
    /// Independent of the cursor. Round-tripping through `from_hex` is
    /// lossless and canonicalizes case.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.store)
    }

    /// Ensure `[position, position + additional)` is writable
    ///
    /// Grows by replacing the store with a zero-initialized allocation
    /// of exactly `position + additional` bytes, old contents copied
    /// into the prefix. Never shrinks.
    fn grow_to_accept(&mut self, additional: usize) {
        let required = self.position + additional;
        if required <= self.store.len() {
            return;
        }
        trace!("growing store: {} -> {} bytes", self.store.len(), required);
        let mut extended = vec![0u8; required];
        extended[..self.store.len()].copy_from_slice(&self.store);
        self.store = extended;
    }

    fn require(&self, kind: &'static str, count: usize) -> Result<()> {
        let end = self.position.saturating_add(count);
        if end > self.store.len() {
            return Err(OctetBufferError::insufficient(kind, end - self.store.len()));
        }
        Ok(())
    }
}

impl Default for OctetBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for OctetBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for OctetBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
