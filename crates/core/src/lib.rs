// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Simulator abstraction and incremental compilation core for HDL regression runs.
//!
//! This crate drives third-party HDL simulators through a pluggable strategy
//! layer: a [`Simulator`] translates uniform analyze and elaborate+run requests
//! into the command dialect of one backend, the [`Runner`] decides per library
//! whether recompilation is needed and executes each invocation through a
//! blocking [`ProcessRunner`], and the [`XmlReporter`] serializes the final
//! pass/fail/skip sets as JUnit-style XML.
//!
//! Dependency scanning, test discovery, and scheduling live outside this
//! crate; callers hand it libraries in compile order and tests one at a time.

pub mod model;
pub mod process;
pub mod report;
pub mod results;
pub mod runner;
pub mod settings;
pub mod simulator;
pub mod time;

pub use model::{HdlFile, HdlVersion, LanguageKind, Library, Test};
pub use process::ProcessRunner;
pub use report::{ReportError, XmlReporter};
pub use results::RunResults;
pub use runner::{Runner, RunnerError};
pub use settings::Settings;
pub use simulator::{select_simulator, CallRequest, Nvc, Simulator, SimulatorCall};
pub use time::{Clock, FakeClock, SystemClock};
