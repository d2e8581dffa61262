//! Duration and cost estimation.
//!
//! Explicit annotations are used verbatim. Otherwise a preliminary scan
//! of the whole file collects every explicit duration/cost present,
//! grouped by action name and averaged ("learned" estimates), so a plan
//! file calibrates its own synthetic timing. Names with no samples fall
//! back to a static per-family base table scaled by a dialect
//! multiplier. Every action receives a strictly positive duration.

use std::collections::{HashMap, HashSet};

use planreel_foundation::{Diagnostic, DiagnosticBuffer, DiagnosticKind, Interner, NameId};
use planreel_parser::{Dialect, MatchedLine};

use crate::action::ActionType;

/// Annotation keys that carry an action cost.
const COST_KEYS: &[&str] = &["cost", "total-cost", "price"];

// =============================================================================
// Configuration
// =============================================================================

/// Static base table and dialect multipliers.
///
/// Base durations descend movement > delivery > manipulation >
/// maintenance, the typical ordering of real plan durations.
#[derive(Clone, Copy, Debug)]
pub struct EstimatorConfig {
    /// Base duration for the move family.
    pub move_base: f64,
    /// Base duration for the terminal/delivery family.
    pub terminal_base: f64,
    /// Base duration for load/unload manipulation.
    pub manipulation_base: f64,
    /// Base duration for the maintenance family.
    pub maintenance_base: f64,
    /// Base duration for waits without an explicit delay.
    pub wait_base: f64,
    /// Base duration for unknown actions.
    pub unknown_base: f64,
    /// Flat default cost for actions without explicit or learned cost.
    pub default_cost: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            move_base: 8.0,
            terminal_base: 5.0,
            manipulation_base: 3.0,
            maintenance_base: 2.0,
            wait_base: 1.0,
            unknown_base: 2.0,
            default_cost: 1.0,
        }
    }
}

impl EstimatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the move-family base duration.
    #[must_use]
    pub const fn with_move_base(mut self, base: f64) -> Self {
        self.move_base = base;
        self
    }

    /// Builder method to set the flat default cost.
    #[must_use]
    pub const fn with_default_cost(mut self, cost: f64) -> Self {
        self.default_cost = cost;
        self
    }

    /// The base duration for an action family.
    #[must_use]
    pub const fn base_for(&self, action_type: ActionType) -> f64 {
        match action_type {
            ActionType::Move => self.move_base,
            ActionType::Terminal => self.terminal_base,
            ActionType::Load | ActionType::Unload => self.manipulation_base,
            ActionType::Maintenance => self.maintenance_base,
            ActionType::Wait => self.wait_base,
            ActionType::Unknown => self.unknown_base,
        }
    }

    /// The synthetic-timing multiplier for a dialect.
    #[must_use]
    pub const fn multiplier_for(dialect: Dialect) -> f64 {
        match dialect {
            Dialect::Classical | Dialect::Temporal => 1.0,
            Dialect::Numerical => 1.2,
            Dialect::Hybrid => 0.8,
        }
    }
}

// =============================================================================
// Estimator
// =============================================================================

/// Supplies missing durations and costs.
#[derive(Clone, Debug)]
pub struct DurationEstimator {
    config: EstimatorConfig,
    /// Per-name averages of explicit durations seen anywhere in the file.
    learned_durations: HashMap<NameId, f64>,
    /// Per-name averages of explicit costs seen anywhere in the file.
    learned_costs: HashMap<NameId, f64>,
    /// Names already reported as base-table fallbacks (one diagnostic
    /// per name).
    reported_fallbacks: HashSet<NameId>,
}

impl DurationEstimator {
    /// Builds an estimator by prescanning all matched lines for explicit
    /// durations and costs.
    #[must_use]
    pub fn learn(lines: &[MatchedLine], interner: &mut Interner, config: EstimatorConfig) -> Self {
        let mut duration_samples: HashMap<NameId, (f64, u32)> = HashMap::new();
        let mut cost_samples: HashMap<NameId, (f64, u32)> = HashMap::new();

        for line in lines {
            let name = interner.intern(&line.name);
            if let Some(duration) = line.explicit_duration {
                let entry = duration_samples.entry(name).or_insert((0.0, 0));
                entry.0 += duration;
                entry.1 += 1;
            }
            if let Some(cost) = explicit_cost(line) {
                let entry = cost_samples.entry(name).or_insert((0.0, 0));
                entry.0 += cost;
                entry.1 += 1;
            }
        }

        let average = |samples: HashMap<NameId, (f64, u32)>| {
            samples
                .into_iter()
                .map(|(name, (sum, count))| (name, sum / f64::from(count)))
                .collect()
        };

        Self {
            config,
            learned_durations: average(duration_samples),
            learned_costs: average(cost_samples),
            reported_fallbacks: HashSet::new(),
        }
    }

    /// Returns the estimator's configuration.
    #[must_use]
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// The learned duration for a name, if any samples existed.
    #[must_use]
    pub fn learned_duration(&self, name: NameId) -> Option<f64> {
        self.learned_durations.get(&name).copied()
    }

    /// The learned cost for a name, if any samples existed.
    #[must_use]
    pub fn learned_cost(&self, name: NameId) -> Option<f64> {
        self.learned_costs.get(&name).copied()
    }

    /// Estimates the duration of one action: explicit value, else the
    /// learned per-name average, else the family base scaled by the
    /// dialect multiplier.
    ///
    /// The result is always strictly positive. A base-table fallback is
    /// recorded once per action name.
    pub fn duration_for(
        &mut self,
        line: &MatchedLine,
        name: NameId,
        action_type: ActionType,
        dialect: Dialect,
        diagnostics: &mut DiagnosticBuffer,
    ) -> f64 {
        if let Some(explicit) = line.explicit_duration {
            if explicit > 0.0 {
                return explicit;
            }
        }
        if let Some(learned) = self.learned_duration(name) {
            if learned > 0.0 {
                return learned;
            }
        }

        if self.reported_fallbacks.insert(name) {
            diagnostics.push(
                Diagnostic::info(
                    DiagnosticKind::EstimatorFallback,
                    format!(
                        "no duration samples for '{}'; using {} base table",
                        line.name,
                        action_type.name()
                    ),
                )
                .at_line(line.line),
            );
        }

        let base = self.config.base_for(action_type) * EstimatorConfig::multiplier_for(dialect);
        base.max(f64::MIN_POSITIVE)
    }

    /// Estimates the cost of one action: explicit annotation, else the
    /// learned per-name average, else the flat default.
    #[must_use]
    pub fn cost_for(&self, line: &MatchedLine, name: NameId) -> f64 {
        if let Some(cost) = explicit_cost(line) {
            return cost;
        }
        self.learned_cost(name).unwrap_or(self.config.default_cost)
    }
}

/// The explicit cost carried by a line's annotations, if any.
fn explicit_cost(line: &MatchedLine) -> Option<f64> {
    line.annotations
        .iter()
        .find(|(key, _)| COST_KEYS.contains(&key.as_str()))
        .map(|(_, value)| *value)
}
