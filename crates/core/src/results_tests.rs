#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

use chrono::TimeZone;

#[test]
fn test_empty_results() {
    let results = RunResults::new();
    assert_eq!(results.total(), 0);
    assert!(!results.any_recorded());
    assert_eq!(results.sim_time_secs(), 0.0);
}

#[test]
fn test_recorded_names_land_in_their_sets() {
    let mut results = RunResults::new();
    results.record_pass("work.tb_a(rtl)");
    results.record_fail("work.tb_b(rtl)");
    results.record_not_run("work.tb_c(rtl)");

    assert_eq!(results.passing(), ["work.tb_a(rtl)".to_string()]);
    assert_eq!(results.failing(), ["work.tb_b(rtl)".to_string()]);
    assert_eq!(results.not_run(), ["work.tb_c(rtl)".to_string()]);
    assert_eq!(results.total(), 3);
    assert!(results.any_recorded());
}

#[test]
fn test_sim_time_accumulates() {
    let mut results = RunResults::new();
    results.add_sim_time(1.25);
    results.add_sim_time(0.75);
    assert_eq!(results.sim_time_secs(), 2.0);
}

#[test]
fn test_with_start_keeps_the_recorded_time() {
    let started = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let mut results = RunResults::with_start(started);
    results.record_pass("work.tb_a(rtl)");
    assert_eq!(results.started_at(), started);
}
