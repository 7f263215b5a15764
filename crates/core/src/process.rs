// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Blocking executor for simulator invocations.

use std::fs::File;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::simulator::SimulatorCall;

/// Runs one external command at a time and waits for it to finish.
///
/// There is no timeout: a hung simulator blocks the calling driver. Callers
/// that parallelize must hand each invocation a distinct transcript path.
#[derive(Clone, Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run one simulator call, optionally in `cwd`, optionally redirecting
    /// stdout and stderr into a transcript file.
    ///
    /// Returns whether the process exited successfully. Spawn and transcript
    /// I/O errors propagate as `Err`; the transcript handle is closed on
    /// every exit path once the process has finished.
    pub fn run(
        &self,
        call: &SimulatorCall,
        cwd: Option<&Path>,
        transcript: Option<&Path>,
    ) -> io::Result<bool> {
        debug!(program = call.program(), args = ?call.args(), "running simulator command");

        let mut command = Command::new(call.program());
        command.args(call.args());
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }

        let status = match transcript {
            Some(path) => {
                let stdout = File::create(path)?;
                let stderr = stdout.try_clone()?;
                command.stdout(Stdio::from(stdout));
                command.stderr(Stdio::from(stderr));
                command.status()?
            }
            None => command.status()?,
        };

        Ok(status.success())
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
