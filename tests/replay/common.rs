//! Shared pipeline helpers for the replay suites.

use planreel_foundation::{DiagnosticBuffer, Interner};
use planreel_parser::{ActionLineMatcher, Dialect, LineFilter};
use planreel_replay::{ReplayConfig, ReplayScheduler};
use planreel_timeline::{EntityRegistry, PlanNormalizer, TimelineAssembler};

/// Builds a scheduler for a plan text with the default configuration.
pub fn scheduler(text: &str, dialect: Dialect) -> (ReplayScheduler, DiagnosticBuffer, Interner) {
    scheduler_with(text, dialect, ReplayConfig::default())
}

/// Builds a scheduler for a plan text with a custom configuration.
pub fn scheduler_with(
    text: &str,
    dialect: Dialect,
    config: ReplayConfig,
) -> (ReplayScheduler, DiagnosticBuffer, Interner) {
    let mut diagnostics = DiagnosticBuffer::default_size();
    let lines = LineFilter::filter(text, dialect).expect("plan text");
    let matched = ActionLineMatcher::new(dialect).match_lines(&lines, &mut diagnostics);

    let mut interner = Interner::new();
    let normalizer = PlanNormalizer::new(dialect);
    let (actions, _) = normalizer.normalize(&matched, &mut interner, &mut diagnostics);
    let timeline = TimelineAssembler::assemble(actions, dialect);
    let registry = EntityRegistry::build(&timeline, &interner, normalizer.extractor().lexicon());

    let scheduler = ReplayScheduler::new(timeline, registry, interner.clone(), config, &mut diagnostics);
    (scheduler, diagnostics, interner)
}
