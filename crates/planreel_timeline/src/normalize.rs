//! Matched line → `NormalizedAction` pipeline.
//!
//! Composes the estimator prescan and the role extractor into the single
//! pass that creates every [`NormalizedAction`] exactly once.

use planreel_foundation::{DiagnosticBuffer, Interner};
use planreel_parser::{Dialect, MatchedLine};

use crate::action::NormalizedAction;
use crate::estimate::{DurationEstimator, EstimatorConfig};
use crate::lexicon::NamingLexicon;
use crate::roles::RoleExtractor;

/// Normalizes matched lines into canonical actions.
#[derive(Clone, Debug)]
pub struct PlanNormalizer {
    dialect: Dialect,
    extractor: RoleExtractor,
    config: EstimatorConfig,
}

impl PlanNormalizer {
    /// Creates a normalizer for the given dialect with the built-in
    /// lexicon and default estimator configuration.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            extractor: RoleExtractor::new(),
            config: EstimatorConfig::default(),
        }
    }

    /// Builder method to set the estimator configuration.
    #[must_use]
    pub const fn with_config(mut self, config: EstimatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method to set the naming lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: NamingLexicon) -> Self {
        self.extractor = RoleExtractor::with_lexicon(lexicon);
        self
    }

    /// Returns the extractor (and through it, the lexicon) in use.
    #[must_use]
    pub const fn extractor(&self) -> &RoleExtractor {
        &self.extractor
    }

    /// Normalizes all matched lines, in order.
    ///
    /// The returned estimator exposes the learned per-name tables for
    /// introspection.
    pub fn normalize(
        &self,
        lines: &[MatchedLine],
        interner: &mut Interner,
        diagnostics: &mut DiagnosticBuffer,
    ) -> (Vec<NormalizedAction>, DurationEstimator) {
        let mut estimator = DurationEstimator::learn(lines, interner, self.config);
        let mut actions = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let name = interner.intern(&line.name);
            let (action_type, roles) = self.extractor.extract(line, interner, diagnostics);
            let duration =
                estimator.duration_for(line, name, action_type, self.dialect, diagnostics);
            let cost = estimator.cost_for(line, name);

            let start = line.time;
            // Step-indexed plans occupy unit slots on the timeline; the
            // estimated duration paces the replay only.
            let end = if self.dialect.is_step_indexed() {
                start + 1.0
            } else {
                start + duration
            };

            actions.push(NormalizedAction {
                start,
                end,
                duration,
                cost,
                name,
                action_type,
                parameters: line.parameters.clone(),
                roles,
                boundary: line.boundary,
                appearance: u32::try_from(index).unwrap_or(u32::MAX),
                line: line.line,
            });
        }

        (actions, estimator)
    }
}
