// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Size command - report the encoded size of a value.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_value, Result};

/// Print the exact encoded size of a value.
#[derive(Args, Clone, Debug)]
pub struct SizeCmd {
    /// Input file (JSON value document)
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

impl SizeCmd {
    pub fn run(self) -> Result<()> {
        let value = read_value(&self.input)?;
        let size = flatbytes::size(&value)?;
        println!("{size}");
        Ok(())
    }
}
