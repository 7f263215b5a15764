// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! HDL regression runner binary entry point.

use clap::Parser;

use hdlreg::cli::Cli;
use hdlreg::run;

fn main() {
    let cli = Cli::parse();
    hdlreg::init_logging(&cli.log_level);

    match run::execute(&cli) {
        Ok(outcome) => {
            if !outcome.success() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
