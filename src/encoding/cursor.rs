// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Write cursor over a pre-sized output buffer.

use super::dispatch::Sink;
use super::primitive::{write_length_prefix, write_scalar};
use crate::core::{ByteOrder, CodecError, Result, Scalar};

/// Cursor that writes into a fixed buffer and only ever moves forward.
///
/// The cursor never grows the buffer. A write that would pass the end is
/// reported as [`CodecError::InvariantViolation`], since the buffer is always
/// sized by the size calculator before writing starts.
///
/// # Example
///
/// ```
/// use flatbytes::encoding::WriteCursor;
/// use flatbytes::{ByteOrder, Scalar};
///
/// let mut buf = [0u8; 6];
/// let mut cursor = WriteCursor::new(&mut buf, ByteOrder::Big);
/// cursor.write_scalar(Scalar::UInt16(0x0102)).unwrap();
/// cursor.write_length_prefix(7).unwrap();
/// assert!(cursor.is_at_end());
/// assert_eq!(buf, [0x01, 0x02, 0, 0, 0, 7]);
/// ```
pub struct WriteCursor<'a> {
    /// Output buffer
    buffer: &'a mut [u8],
    /// Current write position
    offset: usize,
    /// Byte order for multi-byte values
    order: ByteOrder,
}

impl<'a> WriteCursor<'a> {
    /// Create a cursor at the start of `buffer`.
    pub fn new(buffer: &'a mut [u8], order: ByteOrder) -> Self {
        Self {
            buffer,
            offset: 0,
            order,
        }
    }

    /// Create a cursor at `offset` within `buffer`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvariantViolation`] if `offset` is past the end.
    pub fn at(buffer: &'a mut [u8], offset: usize, order: ByteOrder) -> Result<Self> {
        if offset > buffer.len() {
            return Err(CodecError::invariant_violation(format!(
                "cursor offset {offset} is past the end of a {} byte buffer",
                buffer.len()
            )));
        }
        Ok(Self {
            buffer,
            offset,
            order,
        })
    }

    /// Get the current write position.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Get the number of bytes left to write.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Check if the buffer is completely filled.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset == self.buffer.len()
    }

    /// Byte order used for multi-byte values.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Write a scalar.
    pub fn write_scalar(&mut self, scalar: Scalar) -> Result<()> {
        self.offset = write_scalar(self.buffer, self.offset, scalar, self.order)?;
        Ok(())
    }

    /// Write a sequence length prefix.
    pub fn write_length_prefix(&mut self, count: u32) -> Result<()> {
        self.offset = write_length_prefix(self.buffer, self.offset, count, self.order)?;
        Ok(())
    }
}

impl Sink for WriteCursor<'_> {
    fn scalar(&mut self, scalar: Scalar) -> Result<()> {
        self.write_scalar(scalar)
    }

    fn length_prefix(&mut self, count: u32) -> Result<()> {
        self.write_length_prefix(count)
    }
}
