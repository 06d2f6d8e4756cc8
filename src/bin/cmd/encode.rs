// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode command - encode a value into a flat byte stream.

use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, ValueEnum};
use flatbytes::{ByteOrder, EncodedStream, Encoder, EncoderConfig};

use crate::common::{format_binary, read_value, Result};

/// How the encoded bytes are rendered.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lowercase hex on one line
    #[default]
    Hex,
    /// Each byte as 8 binary digits, space separated
    Binary,
    /// The bytes themselves
    Raw,
}

/// Encode a value and print or write the bytes.
#[derive(Args, Clone, Debug)]
pub struct EncodeCmd {
    /// Input file (JSON value document)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Byte order (little, big); overrides the config file
    #[arg(long)]
    order: Option<ByteOrder>,

    /// Encoder config file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl EncodeCmd {
    pub fn run(self) -> Result<()> {
        let encoder = Encoder::with_byte_order(self.resolve_byte_order()?);
        let value = read_value(&self.input)?;
        let stream = encoder.encode(&value)?;

        let rendered = render(&stream, self.format);
        match &self.output {
            Some(path) => std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write '{}'", path.display()))?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&rendered)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// `--order` wins over `--config`, which wins over the default.
    fn resolve_byte_order(&self) -> Result<ByteOrder> {
        if let Some(order) = self.order {
            return Ok(order);
        }
        match &self.config {
            Some(path) => Ok(EncoderConfig::load(path)?.byte_order),
            None => Ok(ByteOrder::default()),
        }
    }
}

fn render(stream: &EncodedStream, format: OutputFormat) -> Vec<u8> {
    let text = match format {
        OutputFormat::Raw => return stream.as_bytes().to_vec(),
        OutputFormat::Hex => stream.to_hex(),
        OutputFormat::Binary => format_binary(stream),
    };
    format!("{text}\nlength: {} bytes\n", stream.len()).into_bytes()
}
