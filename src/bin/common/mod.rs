// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;

use anyhow::Context as _;
use flatbytes::Value;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Read a JSON-serialized value tree from a file.
pub fn read_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| format!("'{}' is not a valid value document", path.display()))?;
    Ok(value)
}

/// Render bytes as space-separated groups of 8 binary digits.
pub fn format_binary(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}
