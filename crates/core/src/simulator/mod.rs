// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Simulator strategy contract and backend selection.
//!
//! Each supported simulator implements [`Simulator`] once; adding a backend
//! means adding an implementation and registering it in [`select_simulator`],
//! never touching dispatch logic elsewhere.

mod nvc;

pub use nvc::Nvc;

use regex::Regex;

use crate::model::{HdlFile, HdlVersion, Test};
use crate::settings::Settings;

/// One external simulator invocation: a program and its ordered arguments.
///
/// Constructed fresh per call and never persisted. Backends are often
/// order-sensitive, so tokens are appended in the exact order they must
/// appear on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatorCall {
    program: String,
    args: Vec<String>,
}

impl SimulatorCall {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    pub fn extend<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments, for logging and assertions.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// Build request handed to a strategy: one file to analyze, or one test to
/// elaborate and run.
#[derive(Debug)]
pub enum CallRequest<'a> {
    /// Compile a single source file into its work library.
    Analyze { file: &'a HdlFile },
    /// Build the design hierarchy for a test and execute it.
    ElabRun {
        test: &'a Test,
        /// Generic/parameter overrides, split on whitespace into tokens.
        generics: Option<&'a str>,
        /// Canonical design-unit token from [`Simulator::module_call`].
        module_call: &'a str,
    },
}

/// Abstract contract implemented once per supported simulator backend.
pub trait Simulator: Send + Sync {
    /// Canonical backend name used for selection and executable lookup.
    fn name(&self) -> &'static str;

    /// Case-insensitive match against the canonical name.
    fn identifies(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(self.name())
    }

    /// Map an HDL standard revision to the backend's version token.
    fn std_token(&self, version: HdlVersion) -> &'static str;

    /// Pattern classifying transcript lines as errors.
    fn error_pattern(&self) -> &Regex;

    /// Pattern classifying transcript lines as warnings.
    fn warning_pattern(&self) -> &Regex;

    /// Build the ordered token sequence for one external invocation.
    ///
    /// Pure function of the request and settings; never mutates shared state.
    fn simulator_call(&self, request: &CallRequest<'_>, settings: &Settings) -> SimulatorCall;

    /// Canonical `"testname-architecture"` token targeting the design unit
    /// at elaboration.
    fn module_call(&self, test: &Test, architecture: &str) -> String;

    /// Human-readable test identifier used in reports:
    /// `"library.testname(architecture)"` for VHDL, `"library.testname"`
    /// for Verilog. The elaboration module-call token is deliberately not a
    /// parameter here; no backend derives anything from it.
    fn describe_test(&self, test: &Test, architecture: &str) -> String;

    /// Resolve the executable: an explicit settings override, or the
    /// lowercased canonical name looked up on `PATH`.
    fn executable(&self, settings: &Settings) -> String {
        match settings.simulator_path() {
            Some(path) => path.display().to_string(),
            None => self.name().to_ascii_lowercase(),
        }
    }
}

/// Pick the strategy whose canonical name matches, case-insensitively.
pub fn select_simulator(name: &str) -> Option<Box<dyn Simulator>> {
    let backends: [Box<dyn Simulator>; 1] = [Box::new(Nvc::new())];
    backends.into_iter().find(|backend| backend.identifies(name))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
