// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Flatbytes CLI
//!
//! Encode JSON-described value trees into flat binary streams.
//!
//! ## Usage
//!
//! ```sh
//! # Encode as hex, big-endian
//! flatbytes encode hotel.json --order big
//!
//! # Print each byte as 8 binary digits
//! flatbytes encode hotel.json --format binary
//!
//! # Write raw bytes to a file, byte order from a config file
//! flatbytes encode hotel.json --config flatbytes.toml --format raw -o hotel.bin
//!
//! # Print the encoded size only
//! flatbytes size hotel.json
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{EncodeCmd, SizeCmd};
use common::Result;
use tracing_subscriber::EnvFilter;

/// Flatbytes - flat binary encoder
///
/// Input files hold one JSON-serialized value tree.
#[derive(Parser, Clone)]
#[command(name = "flatbytes")]
#[command(about = "Encode structured values into flat, length-prefixed binary", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Encode a value and print or write the bytes
    Encode(EncodeCmd),

    /// Print the exact encoded size of a value
    Size(SizeCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.run(),
        Commands::Size(cmd) => cmd.run(),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
