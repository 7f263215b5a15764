// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! End-to-end regression run: compile, simulate, report.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tracing::{error, info, warn};

use hdlreg_core::{
    select_simulator, HdlFile, HdlVersion, Library, ReportError, RunResults, Runner, RunnerError,
    Settings, Test, XmlReporter,
};

use crate::cli::Cli;
use crate::project::{LibrarySpec, ProjectConfig, ProjectError};

/// What one invocation produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub results: RunResults,
    /// Libraries whose compilation failed; their tests were skipped.
    pub failed_libraries: BTreeSet<String>,
    /// Whether a report file was written.
    pub report_written: bool,
}

impl RunOutcome {
    /// The process exit criterion: every library compiled and no test failed.
    pub fn success(&self) -> bool {
        self.failed_libraries.is_empty() && self.results.failing().is_empty()
    }
}

/// Run the whole regression described by the project file.
pub fn execute(cli: &Cli) -> Result<RunOutcome, RunError> {
    let config = ProjectConfig::load(&cli.project)?;
    if !config.name.is_empty() {
        info!(project = %config.name, "starting regression run");
    }

    let simulator = select_simulator(&cli.simulator).ok_or_else(|| RunError::UnknownSimulator {
        name: cli.simulator.clone(),
    })?;

    let settings = build_settings(cli, &config);
    let library_root = settings.library_root();
    std::fs::create_dir_all(&library_root).map_err(|source| RunError::CreateDir {
        path: library_root,
        source,
    })?;
    let output_root = settings.output_root();
    let runner = Runner::new(simulator, settings);

    let mut libraries: Vec<Library> = config.libraries.iter().map(build_library).collect();
    let mut failed_libraries = BTreeSet::new();
    for library in &mut libraries {
        match runner.compile_library(library, cli.force) {
            Ok(()) => {}
            Err(RunnerError::CompileFailed { library, failed }) => {
                error!(library = %library, files = failed.len(), "library failed to compile");
                failed_libraries.insert(library);
            }
            Err(e) => {
                error!(error = %e, "compilation aborted");
                failed_libraries.insert(library.name().to_string());
            }
        }
    }

    let mut results = RunResults::new();
    for spec in &config.tests {
        let test_path = match &spec.output {
            Some(dir) => output_root.join(dir),
            None => output_root
                .join("test")
                .join(format!("{}.{}", spec.library, spec.name)),
        };
        let version = config
            .libraries
            .iter()
            .find(|l| l.name == spec.library)
            .and_then(|l| l.files.iter().find(|f| f.path() == spec.testbench))
            .and_then(|f| f.version())
            .map(HdlVersion::from_tag)
            .unwrap_or_default();
        let testbench = HdlFile::new(&spec.testbench, &spec.library, version);
        let test = Test::new(
            &spec.name,
            testbench,
            &spec.architecture,
            &test_path,
            spec.kind.into(),
        );
        let description = runner.simulator().describe_test(&test, &spec.architecture);

        if failed_libraries.contains(&spec.library) {
            warn!(test = %description, "skipping test: library did not compile");
            results.record_not_run(&description);
            continue;
        }

        std::fs::create_dir_all(&test_path).map_err(|source| RunError::CreateDir {
            path: test_path.clone(),
            source,
        })?;

        let module_call = runner.simulator().module_call(&test, &spec.architecture);
        let started = Instant::now();
        match runner.simulate(&test, spec.generics.as_deref(), &module_call) {
            Ok(true) => {
                info!(test = %description, "test passed");
                results.record_pass(&description);
            }
            Ok(false) => {
                error!(test = %description, "test failed");
                results.record_fail(&description);
            }
            Err(e) => {
                error!(test = %description, error = %e, "simulation did not run");
                results.record_fail(&description);
            }
        }
        results.add_sim_time(started.elapsed().as_secs_f64());
    }

    let report_path = cli
        .report
        .clone()
        .unwrap_or_else(|| output_root.join("report.xml"));
    let report_written = XmlReporter::new(report_path).write(&results)?;

    Ok(RunOutcome {
        results,
        failed_libraries,
        report_written,
    })
}

fn build_settings(cli: &Cli, config: &ProjectConfig) -> Settings {
    let mut settings = Settings::new()
        .with_output_path(&cli.output)
        .with_global_options(config.options.global.clone())
        .with_elaboration_options(config.options.elaboration.clone())
        .with_sim_options(config.options.simulation.clone())
        .with_runtime_options(config.options.runtime.clone())
        .with_gui_mode(cli.gui)
        .with_wave_format(config.options.wave_format.as_str());
    if let Some(path) = &config.options.simulator_path {
        settings = settings.with_simulator_path(path);
    }
    settings
}

fn build_library(spec: &LibrarySpec) -> Library {
    Library::new(&spec.name).with_files(
        spec.files
            .iter()
            .map(|file| {
                let version = file
                    .version()
                    .map(HdlVersion::from_tag)
                    .unwrap_or_default();
                HdlFile::new(file.path(), &spec.name, version)
                    .with_compile_options(file.compile_options().to_vec())
            })
            .collect(),
    )
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("unknown simulator: {name}")]
    UnknownSimulator { name: String },

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
