//! Integration tests for the planreel_replay crate.
//!
//! Tests for the back of the pipeline:
//! - End-to-end scenarios (classical round trip, temporal mid-flight,
//!   hybrid waits)
//! - Replay control (play/pause/step/reset) and its guards
//! - Progress reporting and easing profiles

mod progress_tests;

mod common;
