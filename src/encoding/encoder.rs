// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encoder for turning a value tree into a flat byte stream.

use std::ops::Deref;

use tracing::{debug, error};

use super::calculator::SizeCalculator;
use super::cursor::WriteCursor;
use super::dispatch;
use crate::config::EncoderConfig;
use crate::core::{ByteOrder, CodecError, Inspect, Result};

/// Encoder for writing flat, length-prefixed binary data.
///
/// Encoding is two-pass: the exact output size is computed first, the
/// buffer is allocated once at that size, then filled by a single forward
/// cursor. The buffer never grows or moves while it is written.
///
/// The only state is the byte order. `set_byte_order` needs `&mut self`
/// while `encode` only needs `&self`, so the order cannot change under an
/// encode in progress.
///
/// # Example
///
/// ```
/// use flatbytes::{ByteOrder, Encoder};
///
/// let mut encoder = Encoder::new();
/// encoder.set_byte_order(ByteOrder::Big);
///
/// let stream = encoder.encode("Alex").unwrap();
/// assert_eq!(stream.as_bytes(), &[0, 0, 0, 4, b'A', b'l', b'e', b'x']);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    /// Byte order for multi-byte scalars and length prefixes
    order: ByteOrder,
}

impl Encoder {
    /// Create a new little-endian encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new encoder with the given byte order.
    #[must_use]
    pub fn with_byte_order(order: ByteOrder) -> Self {
        Self { order }
    }

    /// Create a new encoder from configuration.
    #[must_use]
    pub fn from_config(config: &EncoderConfig) -> Self {
        Self::with_byte_order(config.byte_order)
    }

    /// Get the byte order.
    #[must_use]
    pub const fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Set the byte order used by subsequent calls to [`encode`](Self::encode).
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Compute the encoded size of `value` without writing anything.
    ///
    /// The size does not depend on the byte order.
    pub fn size_of<T: Inspect + ?Sized>(&self, value: &T) -> Result<usize> {
        SizeCalculator::measure(value)
    }

    /// Encode `value` into a new, exactly sized byte stream.
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnsupportedType`] if any value in the tree has no
    ///   encoding; no stream is produced
    /// - [`CodecError::InvariantViolation`] if sizing and writing disagree,
    ///   which indicates a bug rather than bad input
    pub fn encode<T: Inspect + ?Sized>(&self, value: &T) -> Result<EncodedStream> {
        let size = SizeCalculator::measure(value)?;

        let mut bytes = vec![0u8; size];
        let mut cursor = WriteCursor::new(&mut bytes, self.order);
        if let Err(err) = dispatch::visit(&mut cursor, value.shape()) {
            if err.is_invariant_violation() {
                error!(
                    size,
                    order = %self.order,
                    fields = ?err.log_fields(),
                    "encoding diverged from computed size"
                );
            }
            return Err(err);
        }

        if !cursor.is_at_end() {
            let written = cursor.position();
            let err = CodecError::invariant_violation(format!(
                "wrote {written} bytes but computed size was {size}"
            ));
            error!(
                size,
                written,
                order = %self.order,
                fields = ?err.log_fields(),
                "encoding diverged from computed size"
            );
            return Err(err);
        }

        debug!(size, order = %self.order, "encoded value");
        Ok(EncodedStream {
            bytes,
            order: self.order,
        })
    }
}

/// Bytes produced by one [`Encoder::encode`] call.
///
/// Owned by the caller; the encoder keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedStream {
    bytes: Vec<u8>,
    order: ByteOrder,
}

impl EncodedStream {
    /// Get the encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of encoded bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the stream is empty (only an empty record encodes to nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte order the stream was written with.
    #[must_use]
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Lowercase hex rendering of the bytes.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Consume the stream and return the bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl Deref for EncodedStream {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for EncodedStream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<EncodedStream> for Vec<u8> {
    fn from(stream: EncodedStream) -> Self {
        stream.bytes
    }
}
