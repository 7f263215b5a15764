// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Compilation and simulation drivers.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error};

use crate::model::{Library, Test};
use crate::process::ProcessRunner;
use crate::settings::Settings;
use crate::simulator::{CallRequest, Simulator};
use crate::time::{Clock, SystemClock};

/// Drives per-library compilation and per-test simulation through the active
/// simulator strategy.
///
/// Single-threaded and synchronous: each invocation blocks until the external
/// process finishes, and compile timestamps advance only after that file's
/// process has completed.
pub struct Runner {
    simulator: Box<dyn Simulator>,
    settings: Settings,
    process: ProcessRunner,
    clock: Arc<dyn Clock>,
}

impl Runner {
    pub fn new(simulator: Box<dyn Simulator>, settings: Settings) -> Self {
        Self {
            simulator,
            settings,
            process: ProcessRunner::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the timestamp source, for deterministic tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn simulator(&self) -> &dyn Simulator {
        self.simulator.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Analyze every file in the library's compile order.
    ///
    /// Libraries that do not need compilation are skipped unless `force` is
    /// set; that per-library gate is the incremental-build short-circuit. A
    /// failing file is logged and recorded but does not stop the remaining
    /// files, so one pass surfaces every failure.
    pub fn compile_library(&self, library: &mut Library, force: bool) -> Result<(), RunnerError> {
        if !library.need_compile() && !force {
            return Ok(());
        }

        let library_name = library.name().to_string();
        let mut failed: Vec<String> = Vec::new();

        for file in library.files_mut() {
            debug!(file = %file.path().display(), "recompiling file");
            let call = self
                .simulator
                .simulator_call(&CallRequest::Analyze { file }, &self.settings);
            match self.process.run(&call, None, None) {
                Ok(true) => file.update_compile_time(self.clock.now_secs()),
                Ok(false) => {
                    error!(file = %file.path().display(), "failed to compile");
                    failed.push(file.path().display().to_string());
                }
                Err(source) => {
                    error!(file = %file.path().display(), error = %source, "failed to run compile command");
                    failed.push(file.path().display().to_string());
                }
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(RunnerError::CompileFailed {
                library: library_name,
                failed,
            })
        }
    }

    /// Elaborate and run one test, capturing its transcript inside the
    /// test's output directory.
    ///
    /// The boolean result is the process exit status, verbatim; retry policy
    /// belongs to the caller.
    pub fn simulate(
        &self,
        test: &Test,
        generics: Option<&str>,
        module_call: &str,
    ) -> Result<bool, RunnerError> {
        debug!(test = test.name(), "running simulation");
        let transcript = test.test_path().join("transcript");
        let call = self.simulator.simulator_call(
            &CallRequest::ElabRun {
                test,
                generics,
                module_call,
            },
            &self.settings,
        );
        self.process
            .run(&call, Some(test.test_path()), Some(&transcript))
            .map_err(|source| RunnerError::Process {
                test: test.name().to_string(),
                source,
            })
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("library {library}: {} file(s) failed to compile", failed.len())]
    CompileFailed {
        library: String,
        /// Paths of every file whose analyze failed, in compile order.
        failed: Vec<String>,
    },

    #[error("failed to run simulator for test {test}: {source}")]
    Process {
        test: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
