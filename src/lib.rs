//! Planreel - plan timeline normalization and replay scheduling
//!
//! This crate re-exports all layers of the Planreel system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: planreel_runtime    — Session, REPL, CLI, serialization
//! Layer 3: planreel_replay     — Replay state machines, scheduler, easing
//! Layer 2: planreel_timeline   — Estimation, roles, registry, assembly
//! Layer 1: planreel_parser     — Line filter, dialect gate, line matcher
//! Layer 0: planreel_foundation — Core types (NameId, Error, Diagnostic)
//! ```

pub use planreel_foundation as foundation;
pub use planreel_parser as parser;
pub use planreel_replay as replay;
pub use planreel_runtime as runtime;
pub use planreel_timeline as timeline;
