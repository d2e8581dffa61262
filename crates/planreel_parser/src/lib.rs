//! Line filtering, dialect gating, and action line matching for Planreel.
//!
//! This crate turns raw planner output into matched action lines that the
//! timeline crate normalizes.
//!
//! # Architecture
//!
//! ```text
//! "0.0: (move robotA roomA roomB) [3.0]"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LINE FILTER &   │  → drops solver banners, search statistics,
//! │ DIALECT GATE    │    comments; rejects domain/problem definitions
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ACTION LINE     │  → MatchedLine { time, name, parameters,
//! │ MATCHER         │      explicit duration, annotations, boundary }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`dialect`] - The four supported plan-text dialects
//! - [`filter`] - Deny-list filtering and the not-a-plan gate
//! - [`scan`] - Per-line cursor used by the grammar matcher
//! - [`matcher`] - Priority-ordered dialect grammars

pub mod dialect;
pub mod filter;
pub mod matcher;
pub mod scan;

// Re-export main types for convenience
pub use dialect::Dialect;
pub use filter::{LineFilter, RawLine};
pub use matcher::{ActionLineMatcher, MatchedLine, ProcessBoundary};
