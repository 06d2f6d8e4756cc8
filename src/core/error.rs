// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for flatbytes.
//!
//! Encoding has exactly two failure modes:
//! - A value somewhere in the tree has no encoding ([`CodecError::UnsupportedType`])
//! - Size computation and writing disagreed ([`CodecError::InvariantViolation`])
//!
//! There is no I/O in the encoding core, so nothing here is transient or
//! worth retrying.

use std::fmt;

/// Errors that can occur while sizing or encoding a value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A value in the tree is not a supported scalar, sequence or record.
    UnsupportedType {
        /// Name of the offending type
        type_name: String,
        /// Location of the value relative to the root, e.g. `.guests[1].name`.
        /// Empty when the root itself is unsupported.
        path: String,
    },

    /// Size computation and the writing pass diverged.
    ///
    /// Indicates a bug in the encoder, never a problem with the input.
    InvariantViolation {
        /// Description of the invariant that was violated
        invariant: String,
    },
}

impl CodecError {
    /// Create an unsupported type error for a value at the root.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        CodecError::UnsupportedType {
            type_name: type_name.into(),
            path: String::new(),
        }
    }

    /// Create an invariant violation error.
    pub fn invariant_violation(invariant: impl Into<String>) -> Self {
        CodecError::InvariantViolation {
            invariant: invariant.into(),
        }
    }

    /// Prefix the error location with a record field.
    ///
    /// Called while the error unwinds out of a record, so paths are built
    /// innermost segment first.
    #[must_use]
    pub fn in_field(self, name: &str) -> Self {
        self.prefix_path(&format!(".{name}"))
    }

    /// Prefix the error location with a sequence index.
    #[must_use]
    pub fn in_element(self, index: usize) -> Self {
        self.prefix_path(&format!("[{index}]"))
    }

    fn prefix_path(self, segment: &str) -> Self {
        match self {
            CodecError::UnsupportedType { type_name, path } => CodecError::UnsupportedType {
                type_name,
                path: format!("{segment}{path}"),
            },
            other => other,
        }
    }

    /// Check if this is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, CodecError::UnsupportedType { .. })
    }

    /// Check if this is an invariant violation.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, CodecError::InvariantViolation { .. })
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnsupportedType { type_name, path } => vec![
                ("type", type_name.clone()),
                ("path", format!("${path}")),
            ],
            CodecError::InvariantViolation { invariant } => {
                vec![("invariant", invariant.clone())]
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnsupportedType { type_name, path } => {
                write!(f, "Unsupported type '{type_name}' at '${path}'")
            }
            CodecError::InvariantViolation { invariant } => {
                write!(f, "Invariant violation: {invariant}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for flatbytes operations.
pub type Result<T> = std::result::Result<T, CodecError>;
