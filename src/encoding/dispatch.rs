// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Recursive traversal shared by sizing and writing.
//!
//! Both passes walk the value tree through [`visit`], depth first, fields in
//! declaration order and elements in index order. The size calculator and
//! the write cursor only differ in what they do at each leaf, so the
//! computed size always equals the number of bytes written.
//!
//! Layout:
//! - Scalar: fixed-width bytes in the configured byte order
//! - Sequence: `uint32(count)` then each element, no separators
//! - Record: each field in order, no prefix and no separators

use tracing::debug;

use super::cursor::WriteCursor;
use crate::core::{ByteOrder, CodecError, Elements, Fields, Inspect, Result, Scalar, Shape};

/// Receiver for the leaves of a traversal.
pub(crate) trait Sink {
    /// A scalar leaf.
    fn scalar(&mut self, scalar: Scalar) -> Result<()>;

    /// The length prefix of a sequence, emitted before its elements.
    fn length_prefix(&mut self, count: u32) -> Result<()>;
}

/// Walk `shape` depth first, feeding every leaf to `sink`.
pub(crate) fn visit<S: Sink + ?Sized>(sink: &mut S, shape: Shape<'_>) -> Result<()> {
    match shape {
        Shape::Scalar(scalar) => sink.scalar(scalar),
        Shape::Sequence(elements) => visit_sequence(sink, elements),
        Shape::Record(fields) => visit_record(sink, fields),
        Shape::Unsupported(type_name) => {
            debug!(type_name = type_name, "rejecting value with no encoding");
            Err(CodecError::unsupported_type(type_name))
        }
    }
}

fn visit_sequence<S: Sink + ?Sized>(sink: &mut S, elements: Elements<'_>) -> Result<()> {
    let len = elements.len();
    let count = u32::try_from(len).map_err(|_| {
        CodecError::unsupported_type(format!(
            "sequence of {len} elements (length prefix is limited to {})",
            u32::MAX
        ))
    })?;
    sink.length_prefix(count)?;

    let mut visited = 0usize;
    for (index, element) in elements.enumerate() {
        visit(sink, element.shape()).map_err(|e| e.in_element(index))?;
        visited += 1;
    }
    if visited != len {
        return Err(CodecError::invariant_violation(format!(
            "sequence announced {len} elements but yielded {visited}"
        )));
    }
    Ok(())
}

fn visit_record<S: Sink + ?Sized>(sink: &mut S, fields: Fields<'_>) -> Result<()> {
    for field in fields {
        visit(sink, field.value.shape()).map_err(|e| e.in_field(field.name))?;
    }
    Ok(())
}

/// Encode `value` into `buffer` starting at `cursor` and return the cursor after it.
///
/// This is the recursive entry point used by [`Encoder`](super::Encoder); it
/// can also be used to place an encoding inside a larger buffer. The buffer
/// must already have room, see [`size`](super::size).
///
/// # Errors
///
/// - [`CodecError::UnsupportedType`] if the tree contains a value with no encoding
/// - [`CodecError::InvariantViolation`] if the encoding does not fit in `buffer`
///
/// Bytes written before an error is detected are left in `buffer`.
pub fn encode_value<T: Inspect + ?Sized>(
    buffer: &mut [u8],
    cursor: usize,
    value: &T,
    order: ByteOrder,
) -> Result<usize> {
    let mut writer = WriteCursor::at(buffer, cursor, order)?;
    visit(&mut writer, value.shape())?;
    Ok(writer.position())
}

/// Encode `elements` as a sequence: a 4-byte count followed by each element.
pub fn write_sequence<T: Inspect>(
    buffer: &mut [u8],
    cursor: usize,
    elements: &[T],
    order: ByteOrder,
) -> Result<usize> {
    encode_value(buffer, cursor, elements, order)
}
