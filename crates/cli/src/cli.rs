// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

/// HDL regression runner
#[derive(Parser, Clone, Debug)]
#[command(name = "hdlreg", version, about = "HDL regression runner")]
pub struct Cli {
    /// Project file describing libraries and tests
    #[arg(short = 'P', long, env = "HDLREG_PROJECT", default_value = "hdlreg.toml")]
    pub project: PathBuf,

    /// Simulator backend to use
    #[arg(long, env = "HDLREG_SIMULATOR", default_value = "nvc")]
    pub simulator: String,

    /// Recompile every library even if it is up to date
    #[arg(long)]
    pub force: bool,

    /// Capture waveforms for inspection after the run
    #[arg(long)]
    pub gui: bool,

    /// Report path (default: <output>/report.xml)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Output directory for compiled libraries, test runs and the report
    #[arg(long, default_value = "hdlreg_output")]
    pub output: PathBuf,

    /// Log level when HDLREG_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
