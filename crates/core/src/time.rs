// SPDX-License-Identifier: MIT
// Copyright (c) 2026 hdlreg contributors

//! Clock seam so compile timestamps are testable without wall-clock time.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Source of the epoch timestamps recorded after successful compiles.
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn now_secs(&self) -> u64;
}

/// Real clock using system time.
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Fake clock with controllable time; clones share state.
#[derive(Clone, Debug, Default)]
pub struct FakeClock {
    current_secs: Arc<AtomicU64>,
}

impl FakeClock {
    pub fn new(start_secs: u64) -> Self {
        Self {
            current_secs: Arc::new(AtomicU64::new(start_secs)),
        }
    }

    pub fn advance_secs(&self, secs: u64) {
        self.current_secs.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, secs: u64) {
        self.current_secs.store(secs, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_secs(&self) -> u64 {
        self.current_secs.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
