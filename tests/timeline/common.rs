//! Shared pipeline helpers for the timeline suites.

use planreel_foundation::{DiagnosticBuffer, Interner};
use planreel_parser::{ActionLineMatcher, Dialect, LineFilter, MatchedLine};
use planreel_timeline::{
    EntityRegistry, NormalizedAction, PlanNormalizer, Timeline, TimelineAssembler,
};

/// Matches all candidate lines of a plan text.
pub fn matched_lines(text: &str, dialect: Dialect) -> (Vec<MatchedLine>, DiagnosticBuffer) {
    let mut diagnostics = DiagnosticBuffer::default_size();
    let lines = LineFilter::filter(text, dialect).expect("plan text");
    let matched = ActionLineMatcher::new(dialect).match_lines(&lines, &mut diagnostics);
    (matched, diagnostics)
}

/// Runs the full normalize pass.
pub fn normalized(
    text: &str,
    dialect: Dialect,
) -> (Vec<NormalizedAction>, Interner, DiagnosticBuffer) {
    let (matched, mut diagnostics) = matched_lines(text, dialect);
    let mut interner = Interner::new();
    let (actions, _) =
        PlanNormalizer::new(dialect).normalize(&matched, &mut interner, &mut diagnostics);
    (actions, interner, diagnostics)
}

/// Runs the pipeline through assembly and registry construction.
pub fn assembled(text: &str, dialect: Dialect) -> (Timeline, EntityRegistry, Interner) {
    let (matched, mut diagnostics) = matched_lines(text, dialect);
    let mut interner = Interner::new();
    let normalizer = PlanNormalizer::new(dialect);
    let (actions, _) = normalizer.normalize(&matched, &mut interner, &mut diagnostics);
    let timeline = TimelineAssembler::assemble(actions, dialect);
    let registry = EntityRegistry::build(&timeline, &interner, normalizer.extractor().lexicon());
    (timeline, registry, interner)
}
