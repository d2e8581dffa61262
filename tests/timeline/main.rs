//! Integration tests for the planreel_timeline crate.
//!
//! Tests for the semantic middle of the pipeline:
//! - Duration/cost estimation (static table and learned averages)
//! - Role extraction across action families
//! - Entity registry categorization
//! - Timeline assembly and aggregates

mod estimator_tests;
mod registry_tests;
mod roles_tests;

mod common;
