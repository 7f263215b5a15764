// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Aggregated outcome of one regression run.

use chrono::{DateTime, Utc};

/// Final pass/fail/skip name sets plus run timing.
///
/// Every executed test name lands in exactly one of the three sets; recording
/// a name twice is a caller bug this type does not police.
#[derive(Clone, Debug)]
pub struct RunResults {
    passing: Vec<String>,
    failing: Vec<String>,
    not_run: Vec<String>,
    sim_time_secs: f64,
    started_at: DateTime<Utc>,
}

impl RunResults {
    /// Start a result set now.
    pub fn new() -> Self {
        Self::with_start(Utc::now())
    }

    /// Start a result set at a recorded run-start time. The report timestamp
    /// comes from this value, not from the moment the report is written.
    pub fn with_start(started_at: DateTime<Utc>) -> Self {
        Self {
            passing: Vec::new(),
            failing: Vec::new(),
            not_run: Vec::new(),
            sim_time_secs: 0.0,
            started_at,
        }
    }

    pub fn record_pass(&mut self, name: impl Into<String>) {
        self.passing.push(name.into());
    }

    pub fn record_fail(&mut self, name: impl Into<String>) {
        self.failing.push(name.into());
    }

    pub fn record_not_run(&mut self, name: impl Into<String>) {
        self.not_run.push(name.into());
    }

    /// Accumulate elapsed simulation time.
    pub fn add_sim_time(&mut self, seconds: f64) {
        self.sim_time_secs += seconds;
    }

    pub fn passing(&self) -> &[String] {
        &self.passing
    }

    pub fn failing(&self) -> &[String] {
        &self.failing
    }

    pub fn not_run(&self) -> &[String] {
        &self.not_run
    }

    pub fn total(&self) -> usize {
        self.passing.len() + self.failing.len() + self.not_run.len()
    }

    /// Whether any test was executed or skipped at all.
    pub fn any_recorded(&self) -> bool {
        self.total() > 0
    }

    pub fn sim_time_secs(&self) -> f64 {
        self.sim_time_secs
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for RunResults {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
