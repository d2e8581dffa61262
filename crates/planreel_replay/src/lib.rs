//! Per-entity replay state machines and the replay scheduler for
//! Planreel.
//!
//! The scheduler holds a monotonic index into the assembled timeline and
//! one mutable record per entity. Discrete transitions commit in
//! `step()`; continuous progress is a derived, presentation-only signal
//! that never revises a committed transition.
//!
//! # Modules
//!
//! - [`state`] - The explicit per-entity state arena and snapshots
//! - [`easing`] - Monotonic easing profiles per action family
//! - [`scheduler`] - `reset`/`step`/`play`/`pause`/`advance` and
//!   progress queries

pub mod easing;
pub mod scheduler;
pub mod state;

// Re-export main types for convenience
pub use scheduler::{ReplayConfig, ReplayScheduler};
pub use state::{
    CargoPlace, CargoRecord, CargoSnapshot, MoverRecord, MoverSnapshot, MoverStatus, ReplayState,
    ReplaySnapshot,
};
