// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! NVC backend strategy.
//!
//! NVC takes library search paths and the work library on every invocation,
//! analyzes with `-a` and runs with `-r`; the token order below is the one
//! the tool accepts.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{HdlVersion, LanguageKind, Test};
use crate::settings::Settings;

use super::{CallRequest, Simulator, SimulatorCall};

static NVC_ERROR: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern, guaranteed valid.
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)(^|\s)(\*\* )?(error|fatal)\s*:").expect("NVC error pattern is invalid")
});

static NVC_WARNING: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern, guaranteed valid.
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)(^|\s)(\*\* )?warning\s*:").expect("NVC warning pattern is invalid")
});

/// Strategy for the NVC VHDL simulator.
#[derive(Clone, Debug, Default)]
pub struct Nvc;

impl Nvc {
    pub fn new() -> Self {
        Self
    }
}

impl Simulator for Nvc {
    fn name(&self) -> &'static str {
        "NVC"
    }

    fn std_token(&self, version: HdlVersion) -> &'static str {
        match version {
            HdlVersion::V1987 => "87",
            HdlVersion::V1993 => "93",
            HdlVersion::V2002 => "02",
            HdlVersion::V2008 => "08",
        }
    }

    fn error_pattern(&self) -> &Regex {
        &NVC_ERROR
    }

    fn warning_pattern(&self) -> &Regex {
        &NVC_WARNING
    }

    fn simulator_call(&self, request: &CallRequest<'_>, settings: &Settings) -> SimulatorCall {
        let file = match request {
            CallRequest::Analyze { file } => file,
            CallRequest::ElabRun { test, .. } => test.testbench(),
        };

        let mut call = SimulatorCall::new(self.executable(settings));

        let library_root = settings.library_root();
        let library_path = library_root.join(file.library());
        call.push(format!("-L{}", library_root.display()));
        call.push(format!("--work={}:{}", file.library(), library_path.display()));
        call.push(format!("--std={}", self.std_token(file.version())));
        call.extend(settings.global_options().iter().cloned());

        match request {
            CallRequest::Analyze { file } => {
                call.push("-a");
                call.push(file.path().display().to_string());
                call.extend(file.compile_options().iter().cloned());
            }
            CallRequest::ElabRun {
                generics,
                module_call,
                ..
            } => {
                call.extend(settings.elaboration_options().iter().cloned());
                call.push(*module_call);
                if let Some(generics) = generics {
                    call.extend(generics.split_whitespace());
                }
                call.push("-r");
                if settings.gui_mode() {
                    let format = settings.wave_format();
                    call.push(format!("--format={format}"));
                    call.push(format!("--wave=sim.{format}"));
                }
                call.extend(settings.sim_options().iter().cloned());
                call.extend(settings.runtime_options().iter().cloned());
            }
        }

        call
    }

    fn module_call(&self, test: &Test, architecture: &str) -> String {
        format!("{}-{}", test.name(), architecture)
    }

    fn describe_test(&self, test: &Test, architecture: &str) -> String {
        let name = format!("{}.{}", test.library(), test.name());
        match test.kind() {
            LanguageKind::Vhdl => format!("{name}({architecture})"),
            LanguageKind::Verilog => name,
        }
    }
}

#[cfg(test)]
#[path = "nvc_tests.rs"]
mod tests;
