// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout flatbytes.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error taxonomy
//! - [`Inspect`] - Type inspection trait and value shapes
//! - [`Value`] - Dynamic value tree
//! - [`ByteOrder`] - Multi-byte layout selection

pub mod error;
pub mod inspect;
pub mod value;

use serde::{Deserialize, Serialize};

pub use error::{CodecError, Result};
pub use inspect::{Elements, FieldRef, Fields, Inspect, Shape};
pub use value::{Field, Record, Scalar, ScalarKind, Value};

/// Byte order for multi-byte scalars and sequence length prefixes.
///
/// Does not affect the order in which record fields or sequence elements
/// are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first (network order)
    Big,
}

/// Error returned when parsing a `ByteOrder` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseByteOrderError {
    _private: (),
}

impl std::fmt::Display for ParseByteOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid byte order, expected 'little' or 'big'")
    }
}

impl std::error::Error for ParseByteOrderError {}

impl std::str::FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "little" | "le" | "little-endian" | "little_endian" => Ok(ByteOrder::Little),
            "big" | "be" | "big-endian" | "big_endian" | "network" => Ok(ByteOrder::Big),
            _ => Err(ParseByteOrderError { _private: () }),
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ByteOrder {
    /// Check if this is little-endian.
    pub fn is_little_endian(&self) -> bool {
        matches!(self, ByteOrder::Little)
    }

    /// Check if this is big-endian.
    pub fn is_big_endian(&self) -> bool {
        matches!(self, ByteOrder::Big)
    }

    /// The opposite byte order.
    #[must_use]
    pub fn swapped(self) -> Self {
        match self {
            ByteOrder::Little => ByteOrder::Big,
            ByteOrder::Big => ByteOrder::Little,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_default_is_little() {
        assert_eq!(ByteOrder::default(), ByteOrder::Little);
    }

    #[test]
    fn test_byte_order_from_str() {
        assert_eq!("little".parse::<ByteOrder>().unwrap(), ByteOrder::Little);
        assert_eq!("LE".parse::<ByteOrder>().unwrap(), ByteOrder::Little);
        assert_eq!("big-endian".parse::<ByteOrder>().unwrap(), ByteOrder::Big);
        assert_eq!("network".parse::<ByteOrder>().unwrap(), ByteOrder::Big);
        let err = "middle".parse::<ByteOrder>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid byte order, expected 'little' or 'big'"
        );
    }

    #[test]
    fn test_byte_order_helpers() {
        assert!(ByteOrder::Little.is_little_endian());
        assert!(ByteOrder::Big.is_big_endian());
        assert_eq!(ByteOrder::Little.swapped(), ByteOrder::Big);
        assert_eq!(ByteOrder::Big.swapped(), ByteOrder::Little);
        assert_eq!(ByteOrder::Big.to_string(), "big");
    }

    #[test]
    fn test_byte_order_serde() {
        assert_eq!(serde_json::to_string(&ByteOrder::Big).unwrap(), "\"big\"");
        let order: ByteOrder = serde_json::from_str("\"little\"").unwrap();
        assert_eq!(order, ByteOrder::Little);
    }
}
