// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Immutable run settings threaded into the runner and strategies.
//!
//! Replaces a mutable global project object: built once by the caller, then
//! passed by reference so command construction stays a pure function of its
//! inputs.

use std::path::{Path, PathBuf};

/// Default directory (under the simulation path) for generated output.
pub const DEFAULT_OUTPUT_PATH: &str = "hdlreg_output";
/// Default waveform capture format for GUI mode.
pub const DEFAULT_WAVE_FORMAT: &str = "fst";

/// Settings for one regression run.
#[derive(Clone, Debug)]
pub struct Settings {
    sim_path: PathBuf,
    output_path: PathBuf,
    simulator_path: Option<PathBuf>,
    global_options: Vec<String>,
    elaboration_options: Vec<String>,
    sim_options: Vec<String>,
    runtime_options: Vec<String>,
    gui_mode: bool,
    wave_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sim_path: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            simulator_path: None,
            global_options: Vec::new(),
            elaboration_options: Vec::new(),
            sim_options: Vec::new(),
            runtime_options: Vec::new(),
            gui_mode: false,
            wave_format: DEFAULT_WAVE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the run executes under.
    pub fn with_sim_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sim_path = path.into();
        self
    }

    /// Output directory relative to the simulation path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Explicit simulator executable. When unset, the strategy resolves the
    /// executable from its canonical name via `PATH`.
    pub fn with_simulator_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.simulator_path = Some(path.into());
        self
    }

    /// Options passed to every invocation, before the phase flag.
    pub fn with_global_options(mut self, options: Vec<String>) -> Self {
        self.global_options = options;
        self
    }

    /// Options passed before the module call at elaboration.
    pub fn with_elaboration_options(mut self, options: Vec<String>) -> Self {
        self.elaboration_options = options;
        self
    }

    /// Options passed after the run flag.
    pub fn with_sim_options(mut self, options: Vec<String>) -> Self {
        self.sim_options = options;
        self
    }

    /// Runtime options appended last.
    pub fn with_runtime_options(mut self, options: Vec<String>) -> Self {
        self.runtime_options = options;
        self
    }

    /// Enable waveform capture for interactive inspection.
    pub fn with_gui_mode(mut self, gui_mode: bool) -> Self {
        self.gui_mode = gui_mode;
        self
    }

    pub fn with_wave_format(mut self, format: impl Into<String>) -> Self {
        self.wave_format = format.into();
        self
    }

    pub fn sim_path(&self) -> &Path {
        &self.sim_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Output root: `<sim_path>/<output_path>`.
    pub fn output_root(&self) -> PathBuf {
        self.sim_path.join(&self.output_path)
    }

    /// Root of the compiled-library tree: `<sim_path>/<output_path>/library`.
    pub fn library_root(&self) -> PathBuf {
        self.output_root().join("library")
    }

    pub fn simulator_path(&self) -> Option<&Path> {
        self.simulator_path.as_deref()
    }

    pub fn global_options(&self) -> &[String] {
        &self.global_options
    }

    pub fn elaboration_options(&self) -> &[String] {
        &self.elaboration_options
    }

    pub fn sim_options(&self) -> &[String] {
        &self.sim_options
    }

    pub fn runtime_options(&self) -> &[String] {
        &self.runtime_options
    }

    pub fn gui_mode(&self) -> bool {
        self.gui_mode
    }

    pub fn wave_format(&self) -> &str {
        &self.wave_format
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
