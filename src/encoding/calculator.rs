// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Size calculator for computing the exact encoded size of a value.

use super::dispatch::{self, Sink};
use super::primitive::LENGTH_PREFIX_SIZE;
use crate::core::{Inspect, Result, Scalar, ScalarKind};

/// Size calculator.
///
/// Computes the size of encoded data before encoding it, so the output
/// buffer can be allocated exactly once. The encoded format has no alignment
/// padding, so the size is a plain sum of scalar widths and length prefixes.
///
/// # Example
///
/// ```
/// use flatbytes::encoding::SizeCalculator;
/// use flatbytes::ScalarKind;
///
/// let mut calc = SizeCalculator::new();
/// calc.scalar(ScalarKind::Int32);   // 4 bytes
/// calc.length_prefix();             // 4 bytes
/// calc.scalar(ScalarKind::UInt8);   // 1 byte
/// assert_eq!(calc.size(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SizeCalculator {
    /// Bytes counted so far
    offset: usize,
}

impl SizeCalculator {
    /// Create a new calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the encoded size of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedType`](crate::CodecError) if any value
    /// reachable from `value` has no encoding. No partial size is reported.
    pub fn measure<T: Inspect + ?Sized>(value: &T) -> Result<usize> {
        let mut calc = Self::new();
        calc.add(value)?;
        Ok(calc.size())
    }

    /// Add the encoded size of `value` to the running total.
    ///
    /// On error the running total is left unchanged.
    pub fn add<T: Inspect + ?Sized>(&mut self, value: &T) -> Result<usize> {
        let mut scratch = Self::new();
        dispatch::visit(&mut scratch, value.shape())?;
        self.offset += scratch.offset;
        Ok(self.offset)
    }

    /// Get the current calculated size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.offset
    }

    /// Count one scalar of the given kind.
    pub fn scalar(&mut self, kind: ScalarKind) -> usize {
        self.offset += kind.width();
        self.offset
    }

    /// Count a sequence length prefix.
    pub fn length_prefix(&mut self) -> usize {
        self.offset += LENGTH_PREFIX_SIZE;
        self.offset
    }
}

impl Sink for SizeCalculator {
    fn scalar(&mut self, scalar: Scalar) -> Result<()> {
        SizeCalculator::scalar(self, scalar.kind());
        Ok(())
    }

    fn length_prefix(&mut self, _count: u32) -> Result<()> {
        SizeCalculator::length_prefix(self);
        Ok(())
    }
}

/// Compute the exact encoded size of `value`.
///
/// Shorthand for [`SizeCalculator::measure`].
pub fn size<T: Inspect + ?Sized>(value: &T) -> Result<usize> {
    SizeCalculator::measure(value)
}
