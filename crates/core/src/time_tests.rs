#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_system_clock() {
    let clock = SystemClock::new();
    // After 2023
    assert!(clock.now_secs() > 1_700_000_000);
}

#[test]
fn test_fake_clock_starts_at_given_time() {
    let clock = FakeClock::new(1000);
    assert_eq!(clock.now_secs(), 1000);
}

#[test]
fn test_fake_clock_advance() {
    let clock = FakeClock::new(1000);
    clock.advance_secs(60);
    assert_eq!(clock.now_secs(), 1060);
}

#[test]
fn test_fake_clock_set() {
    let clock = FakeClock::new(0);
    clock.set(42);
    assert_eq!(clock.now_secs(), 42);
}

#[test]
fn test_fake_clock_clones_share_state() {
    let clock = FakeClock::new(10);
    let other = clock.clone();
    clock.advance_secs(5);
    assert_eq!(other.now_secs(), 15);
}
