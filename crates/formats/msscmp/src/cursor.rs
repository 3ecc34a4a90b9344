//! Byte-level access to a container image.
//!
//! [`Cursor`] is the only reader in the crate; everything above it parses
//! through these methods, so the offset bookkeeping and endianness handling
//! live in exactly one place. [`Writer`] is its counterpart for assembling
//! images, used by the test suite to build synthetic banks.

use crate::error::{Error, Result};

/// Byte order of a container, selected once by the signature sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// `BANK` signature.
    Big,
    /// `KNAB` signature, the same magic as stored by a little-endian packer.
    Little,
}

impl ByteOrder {
    fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        }
    }

    fn u32_to(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        }
    }
}

/// Endianness-aware reader over an in-memory container.
///
/// Holds the one piece of mutable decode state: the current position. The
/// byte order is fixed at construction and applies to every multi-byte
/// read. Out-of-band lookups go through [`Cursor::read_at`], which saves
/// and unconditionally restores the position, so a table scan can chase
/// string and record offsets without losing its place in the table.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8], order: ByteOrder) -> Self {
        Self { data, pos: 0, order }
    }

    /// Current absolute position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to an absolute position. Seeking past the end is allowed; the
    /// next read there fails with [`Error::Truncated`].
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Bytes left between the position and the end of the data.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Read `n` raw bytes, advancing the position. A zero-length read
    /// succeeds wherever the position points, even past the end; shipped
    /// banks contain zero-size sources whose recovered offset lies beyond
    /// the image.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n == 0 {
            return Ok(&[]);
        }
        match self.data.get(self.pos..self.pos.saturating_add(n)) {
            Some(bytes) => {
                self.pos += n;
                Ok(bytes)
            }
            None => Err(Error::Truncated {
                offset: self.pos,
                wanted: n,
                available: self.remaining(),
            }),
        }
    }

    /// Read one word in the container's byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(self.order.u32_from([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read `n` consecutive words.
    pub fn read_u32s(&mut self, n: usize) -> Result<Vec<u32>> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.read_u32()?);
        }
        Ok(values)
    }

    /// Read one IEEE-754 single in the container's byte order.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Run `f` with the position moved to `offset`, then restore the prior
    /// position, also when `f` fails. Every out-of-band lookup (strings,
    /// source records, payload ranges) goes through here; nothing else
    /// moves the position behind a scan's back.
    pub fn read_at<T>(
        &mut self,
        offset: usize,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let saved = self.pos;
        self.pos = offset;
        let result = f(self);
        self.pos = saved;
        result
    }

    /// Scoped read of the NUL-terminated string at `offset`, terminator
    /// excluded. The position is unchanged afterwards.
    pub fn read_cstring_at(&mut self, offset: usize) -> Result<String> {
        self.read_at(offset, |c| c.read_cstring())
    }

    /// Read the NUL-terminated string at the current position without
    /// advancing.
    pub fn peek_cstring(&mut self) -> Result<String> {
        self.read_cstring_at(self.pos)
    }

    fn read_cstring(&mut self) -> Result<String> {
        let start = self.pos;
        let tail = self.data.get(start..).unwrap_or(&[]);
        let len = tail
            .iter()
            .position(|&b| b == 0)
            .ok_or(Error::UnterminatedString { offset: start })?;
        let text = std::str::from_utf8(&tail[..len])
            .map_err(|_| Error::StringNotUtf8 { offset: start })?;
        self.pos = start + len + 1;
        Ok(text.to_owned())
    }
}

/// Byte-order-aware builder for container images.
///
/// The format addresses regions by absolute offset, so building an image
/// needs back-patching ([`Writer::patch_u32`]) and zero-fill up to a chosen
/// offset ([`Writer::pad_to`]) besides plain appends. The test suite uses
/// this to assemble synthetic banks; re-encoding real containers is not a
/// goal.
#[derive(Debug)]
pub struct Writer {
    buf: Vec<u8>,
    order: ByteOrder,
}

impl Writer {
    pub fn new(order: ByteOrder) -> Self {
        Self {
            buf: Vec::new(),
            order,
        }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&self.order.u32_to(value));
    }

    pub fn write_f32(&mut self, value: f32) {
        self.write_u32(value.to_bits());
    }

    /// Append the string bytes plus a NUL terminator.
    pub fn write_cstring(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
        self.buf.push(0);
    }

    /// Overwrite a previously written word at `pos`.
    pub fn patch_u32(&mut self, pos: usize, value: u32) {
        self.buf[pos..pos + 4].copy_from_slice(&self.order.u32_to(value));
    }

    /// Zero-fill until the write position reaches `offset`. Panics if
    /// `offset` is behind the current position; layouts are built front to
    /// back.
    pub fn pad_to(&mut self, offset: usize) {
        assert!(
            offset >= self.buf.len(),
            "pad_to({offset:#x}) is behind position {:#x}",
            self.buf.len()
        );
        self.buf.resize(offset, 0);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
