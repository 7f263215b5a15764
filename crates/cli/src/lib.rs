// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! HDL regression runner front end.
//!
//! Parses a TOML project description, drives the compile and simulate
//! phases in `hdlreg-core`, and writes the JUnit-style report.

pub mod cli;
pub mod project;
pub mod run;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `HDLREG_LOG` overrides the level given on the command line.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("HDLREG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
