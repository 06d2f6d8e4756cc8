// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Flat binary encoding.
//!
//! - [`primitive`] - fixed-width scalar and length-prefix writes
//! - [`calculator`] - exact size computation (pass one)
//! - [`cursor`] - bounded forward-only writer (pass two)
//! - [`encoder`] - the two-pass [`Encoder`] and its output

pub mod calculator;
pub mod cursor;
mod dispatch;
pub mod encoder;
pub mod primitive;


pub use calculator::{size, SizeCalculator};
pub use cursor::WriteCursor;
pub use dispatch::{encode_value, write_sequence};
pub use encoder::{EncodedStream, Encoder};
pub use primitive::{write_length_prefix, write_scalar, LENGTH_PREFIX_SIZE};
