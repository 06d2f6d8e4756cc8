// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Flatbytes
//!
//! Flat, length-prefixed binary encoding of structured values.
//!
//! A value tree is written depth first into a single byte buffer:
//! - **Scalars** (`i8`..`u64`, `f32`, `f64`) as fixed-width bytes in the
//!   configured byte order
//! - **Sequences** (slices, `Vec`, arrays, text) as a `u32` element count
//!   followed by each element
//! - **Records** as the concatenation of their fields, with no header
//!
//! Encoding is two-pass: [`size`] computes the exact length, the buffer is
//! allocated once, then filled by a bounded forward-only cursor.
//!
//! ## Architecture
//!
//! - `core/` - error taxonomy, scalar kinds, the [`Inspect`] trait and the
//!   dynamic [`Value`] tree
//! - `encoding/` - scalar codec, size calculator, write cursor and [`Encoder`]
//! - `config` - TOML encoder configuration
//!
//! ## Example
//!
//! ```rust
//! use flatbytes::{inspect_record, ByteOrder, Encoder};
//!
//! struct Person {
//!     name: String,
//!     age: u8,
//!     gender: u8,
//! }
//! inspect_record!(Person { name, age, gender });
//!
//! struct Hotel {
//!     manager: Person,
//!     guests: Vec<Person>,
//! }
//! inspect_record!(Hotel { manager, guests });
//!
//! # fn main() -> flatbytes::Result<()> {
//! let hotel = Hotel {
//!     manager: Person { name: "Alex".into(), age: 32, gender: 0 },
//!     guests: vec![
//!         Person { name: "Thomas".into(), age: 40, gender: 1 },
//!         Person { name: "Dan".into(), age: 18, gender: 1 },
//!     ],
//! };
//!
//! let stream = Encoder::with_byte_order(ByteOrder::Big).encode(&hotel)?;
//! assert_eq!(stream.len(), 35);
//! assert_eq!(&stream[..4], &[0, 0, 0, 4]);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use core::{
    ByteOrder, CodecError, Elements, Field, FieldRef, Fields, Inspect, Record, Result, Scalar,
    ScalarKind, Shape, Value,
};

// Encoding
pub mod encoding;

pub use encoding::{
    encode_value, size, write_length_prefix, write_scalar, write_sequence, EncodedStream, Encoder,
    SizeCalculator, WriteCursor,
};

// Configuration
pub mod config;

pub use config::{ConfigError, EncoderConfig};
