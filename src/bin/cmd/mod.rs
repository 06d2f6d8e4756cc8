// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod encode;
mod size;

pub use encode::EncodeCmd;
pub use size::SizeCmd;
