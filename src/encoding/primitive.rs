// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-width scalar codec.
//!
//! Integers are written as their two's-complement bit pattern and floats as
//! their IEEE-754 bit pattern, at the kind's fixed width, in the requested
//! byte order. Nothing here allocates: the buffer is sized up front by the
//! size calculator and every write is bounds-checked against it.

use byteorder::{BigEndian, LittleEndian};

use crate::core::{ByteOrder, CodecError, Result, Scalar};

/// Size of a sequence length prefix in bytes.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Write one scalar at `cursor` and return the cursor after it.
///
/// # Errors
///
/// Returns [`CodecError::InvariantViolation`] if the scalar does not fit in
/// the remaining buffer. With a buffer sized by the size calculator this
/// cannot happen.
pub fn write_scalar(
    buffer: &mut [u8],
    cursor: usize,
    scalar: Scalar,
    order: ByteOrder,
) -> Result<usize> {
    let end = checked_end(buffer.len(), cursor, scalar.width())?;
    let dst = &mut buffer[cursor..end];
    match order {
        ByteOrder::Little => put::<LittleEndian>(dst, scalar),
        ByteOrder::Big => put::<BigEndian>(dst, scalar),
    }
    Ok(end)
}

/// Write a sequence element count as an unsigned 32-bit integer.
///
/// # Errors
///
/// Returns [`CodecError::InvariantViolation`] if the prefix does not fit.
pub fn write_length_prefix(
    buffer: &mut [u8],
    cursor: usize,
    count: u32,
    order: ByteOrder,
) -> Result<usize> {
    write_scalar(buffer, cursor, Scalar::UInt32(count), order)
}

fn checked_end(len: usize, cursor: usize, width: usize) -> Result<usize> {
    match cursor.checked_add(width) {
        Some(end) if end <= len => Ok(end),
        _ => Err(CodecError::invariant_violation(format!(
            "write of {width} bytes at offset {cursor} exceeds buffer of {len} bytes"
        ))),
    }
}

fn put<B: byteorder::ByteOrder>(dst: &mut [u8], scalar: Scalar) {
    match scalar {
        Scalar::Int8(v) => dst[0] = v as u8,
        Scalar::UInt8(v) => dst[0] = v,
        Scalar::Int16(v) => B::write_i16(dst, v),
        Scalar::UInt16(v) => B::write_u16(dst, v),
        Scalar::Int32(v) => B::write_i32(dst, v),
        Scalar::UInt32(v) => B::write_u32(dst, v),
        Scalar::Int64(v) => B::write_i64(dst, v),
        Scalar::UInt64(v) => B::write_u64(dst, v),
        Scalar::Float32(v) => B::write_f32(dst, v),
        Scalar::Float64(v) => B::write_f64(dst, v),
    }
}
