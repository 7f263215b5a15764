// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! JUnit-style XML result reporter.
//!
//! Format reference: <https://github.com/testmoapp/junitxml>

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::results::RunResults;

/// Root suite name emitted in the report.
pub const REPORT_SUITE_NAME: &str = "hdlreg simulation run";

const FAIL_MESSAGE: &str = "Test case failed.";
const SKIP_MESSAGE: &str = "Test was skipped.";

/// Writes the final regression outcome to one XML file.
///
/// The reporter only reads the outcome sets; it is invoked once, after all
/// tests have completed.
#[derive(Clone, Debug)]
pub struct XmlReporter {
    path: PathBuf,
}

impl XmlReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `results` to the report path, overwriting any existing file.
    ///
    /// Returns `Ok(false)` without touching the filesystem when no test was
    /// run: an absent report is the documented signal for "nothing executed",
    /// distinct from an empty-but-present one.
    pub fn write(&self, results: &RunResults) -> Result<bool, ReportError> {
        if !results.any_recorded() {
            return Ok(false);
        }

        let document = render(results);
        fs::write(&self.path, document).map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), tests = results.total(), "wrote regression report");
        Ok(true)
    }
}

/// Render the report with stable 4-space indentation.
fn render(results: &RunResults) -> String {
    let timestamp = results.started_at().format("%Y-%m-%dT%H:%M:%S%.6f");
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" ?>\n");
    out.push_str(&format!(
        "<testsuites name=\"{}\" tests=\"{}\" failures=\"{}\" skipped=\"{}\" time=\"{}\" timestamp=\"{}\">\n",
        escape(REPORT_SUITE_NAME),
        results.total(),
        results.failing().len(),
        results.not_run().len(),
        results.sim_time_secs(),
        timestamp,
    ));
    out.push_str("    <testsuite name=\"All\">\n");
    for name in results.passing() {
        out.push_str(&format!("        <testcase name=\"{}\"/>\n", escape(name)));
    }
    for name in results.failing() {
        out.push_str(&format!("        <testcase name=\"{}\">\n", escape(name)));
        out.push_str(&format!(
            "            <failure message=\"{FAIL_MESSAGE}\"/>\n"
        ));
        out.push_str("        </testcase>\n");
    }
    for name in results.not_run() {
        out.push_str(&format!("        <testcase name=\"{}\">\n", escape(name)));
        out.push_str(&format!(
            "            <skipped message=\"{SKIP_MESSAGE}\"/>\n"
        ));
        out.push_str("        </testcase>\n");
    }
    out.push_str("    </testsuite>\n");
    out.push_str("</testsuites>\n");
    out
}

/// Escape a value for use inside a double-quoted XML attribute.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
