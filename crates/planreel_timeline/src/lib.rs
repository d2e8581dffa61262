//! Duration estimation, role extraction, entity registry construction,
//! and timeline assembly for Planreel.
//!
//! This crate takes the matched lines the parser produced and builds the
//! canonical, time-ordered model the replay scheduler consumes.
//!
//! # Architecture
//!
//! ```text
//! MatchedLine*
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ ESTIMATOR       │  → learned per-name averages, else family base
//! │ (prescan)       │    table × dialect multiplier
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ ROLE            │  → action family + (mover, cargo, origin,
//! │ EXTRACTOR       │    destination), nulls tolerated
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ TIMELINE        │  → stable sort, makespan, total cost,
//! │ ASSEMBLER       │    max concurrency
//! └─────────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ ENTITY REGISTRY │  → deduplicated movers / cargo / locations
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`action`] - `NormalizedAction`, action families, roles
//! - [`lexicon`] - Naming-pattern dictionaries for entity classification
//! - [`roles`] - Family classification and role assignment
//! - [`estimate`] - Duration/cost estimation
//! - [`normalize`] - Matched line → `NormalizedAction` pipeline
//! - [`registry`] - Entity registry construction
//! - [`assemble`] - Timeline sorting and aggregates

pub mod action;
pub mod assemble;
pub mod estimate;
pub mod lexicon;
pub mod normalize;
pub mod registry;
pub mod roles;

// Re-export main types for convenience
pub use action::{ActionType, NormalizedAction, Roles};
pub use assemble::{Timeline, TimelineAssembler};
pub use estimate::{DurationEstimator, EstimatorConfig};
pub use lexicon::{EntityCategory, LocationKind, NamingLexicon};
pub use normalize::PlanNormalizer;
pub use registry::EntityRegistry;
pub use roles::RoleExtractor;
