//! Timeline sorting and aggregate metrics.
//!
//! The assembler stable-sorts normalized actions by `(start, appearance
//! order)` and computes the aggregates once; the resulting [`Timeline`]
//! is read-only and never recomputed during replay.

use planreel_parser::Dialect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::action::NormalizedAction;

// =============================================================================
// Timeline
// =============================================================================

/// The full ordered action sequence plus derived aggregates.
///
/// Immutable after assembly: accessors hand out cheap structural clones
/// of the persistent action vector.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timeline {
    /// Actions sorted by `(start, appearance)`.
    actions: im::Vector<NormalizedAction>,
    /// The dialect the plan was parsed as.
    dialect: Dialect,
    /// Max action end, or action count for step-indexed dialects.
    makespan: f64,
    /// Sum of action costs.
    total_cost: f64,
    /// Peak count of simultaneously active actions.
    max_concurrency: usize,
}

impl Timeline {
    /// The number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True if the timeline holds no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The action at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NormalizedAction> {
        self.actions.get(index)
    }

    /// Iterates actions in timeline order.
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedAction> {
        self.actions.iter()
    }

    /// The ordered action vector (cheap structural clone).
    #[must_use]
    pub fn actions(&self) -> im::Vector<NormalizedAction> {
        self.actions.clone()
    }

    /// The dialect the plan was parsed as.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The total logical time span of the plan.
    #[must_use]
    pub const fn makespan(&self) -> f64 {
        self.makespan
    }

    /// The summed action cost.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// The peak count of simultaneously active actions.
    #[must_use]
    pub const fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }
}

// =============================================================================
// Assembler
// =============================================================================

/// Builds a [`Timeline`] from normalized actions.
pub struct TimelineAssembler;

impl TimelineAssembler {
    /// Sorts actions and computes aggregates.
    #[must_use]
    pub fn assemble(mut actions: Vec<NormalizedAction>, dialect: Dialect) -> Timeline {
        // Stable tie-break: dialects permitting equal timestamps keep
        // their original appearance order.
        actions.sort_by(|a, b| {
            a.start
                .total_cmp(&b.start)
                .then_with(|| a.appearance.cmp(&b.appearance))
        });

        let makespan = if dialect.is_step_indexed() {
            #[allow(clippy::cast_precision_loss)]
            {
                actions.len() as f64
            }
        } else {
            actions.iter().map(|a| a.end).fold(0.0_f64, f64::max)
        };
        let total_cost = actions.iter().map(|a| a.cost).sum();
        let max_concurrency = Self::sweep_concurrency(&actions);

        Timeline {
            actions: actions.into_iter().collect(),
            dialect,
            makespan,
            total_cost,
            max_concurrency,
        }
    }

    /// Sweep-line over half-open `[start, end)` intervals. Ends are
    /// processed before starts at equal times so adjacent actions do not
    /// count as concurrent.
    fn sweep_concurrency(actions: &[NormalizedAction]) -> usize {
        let mut events: Vec<(f64, i32)> = Vec::with_capacity(actions.len() * 2);
        for action in actions {
            events.push((action.start, 1));
            events.push((action.end, -1));
        }
        events.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        let mut active = 0_i32;
        let mut peak = 0_i32;
        for (_, delta) in events {
            active += delta;
            peak = peak.max(active);
        }
        usize::try_from(peak).unwrap_or(0)
    }
}
