//! Property tests for the parse → timeline pipeline.
//!
//! Covers idempotence (same text, same timeline), monotonicity of the
//! assembled order, strictly positive durations, crash resistance on
//! arbitrary input, and idempotent registry categorization.

use proptest::prelude::*;

use planreel_foundation::{DiagnosticBuffer, Interner};
use planreel_parser::{ActionLineMatcher, Dialect, LineFilter};
use planreel_timeline::{EntityRegistry, PlanNormalizer, Timeline, TimelineAssembler};

// ==========================================================================
// Generators
// ==========================================================================

/// Strategy for one synthetic plan row: (time, verb index, entity
/// indices).
fn plan_row() -> impl Strategy<Value = (u16, usize, u8, u8, u8)> {
    (0..500u16, 0..6usize, 0..6u8, 0..6u8, 0..6u8)
}

const VERBS: [&str; 6] = ["load", "unload", "drive", "deliver", "refuel", "frobnicate"];

/// Renders rows as a temporal plan text.
fn render_plan(rows: &[(u16, usize, u8, u8, u8)]) -> String {
    rows.iter()
        .map(|&(t, verb, a, b, c)| {
            let verb = VERBS[verb];
            match verb {
                "load" | "unload" => format!("{t}.0: ({verb} obj{a} tru{b} pos{c})\n"),
                "drive" => format!("{t}.0: ({verb} tru{a} pos{b} pos{c})\n"),
                "deliver" => format!("{t}.0: ({verb} obj{a} pos{b} pos{c})\n"),
                "refuel" => format!("{t}.0: ({verb} tru{a} pos{b})\n"),
                _ => format!("{t}.0: ({verb} thing{a} widget{b} gadget{c})\n"),
            }
        })
        .collect()
}

/// Runs the pipeline through assembly.
fn build(text: &str, dialect: Dialect) -> (Timeline, EntityRegistry, Interner) {
    let mut diagnostics = DiagnosticBuffer::default_size();
    let lines = LineFilter::filter(text, dialect).expect("generated plans are plans");
    let matched = ActionLineMatcher::new(dialect).match_lines(&lines, &mut diagnostics);
    let mut interner = Interner::new();
    let normalizer = PlanNormalizer::new(dialect);
    let (actions, _) = normalizer.normalize(&matched, &mut interner, &mut diagnostics);
    let timeline = TimelineAssembler::assemble(actions, dialect);
    let registry = EntityRegistry::build(&timeline, &interner, normalizer.extractor().lexicon());
    (timeline, registry, interner)
}

// ==========================================================================
// Properties
// ==========================================================================

proptest! {
    /// Parsing the same text twice yields an identical timeline.
    #[test]
    fn parsing_is_idempotent(rows in prop::collection::vec(plan_row(), 0..40)) {
        let text = render_plan(&rows);
        let (timeline_a, registry_a, _) = build(&text, Dialect::Temporal);
        let (timeline_b, registry_b, _) = build(&text, Dialect::Temporal);

        prop_assert_eq!(timeline_a, timeline_b);
        prop_assert_eq!(registry_a, registry_b);
    }

    /// Assembled actions are sorted by start, ascending.
    #[test]
    fn timeline_is_monotonic(rows in prop::collection::vec(plan_row(), 0..40)) {
        let text = render_plan(&rows);
        let (timeline, _, _) = build(&text, Dialect::Temporal);

        let starts: Vec<f64> = timeline.iter().map(|a| a.start).collect();
        for pair in starts.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    /// Every action receives a strictly positive duration, annotated or
    /// not.
    #[test]
    fn durations_are_strictly_positive(rows in prop::collection::vec(plan_row(), 0..40)) {
        let text = render_plan(&rows);
        let (timeline, _, _) = build(&text, Dialect::Temporal);

        for action in timeline.iter() {
            prop_assert!(action.duration > 0.0);
        }
    }

    /// An identifier lands in the same registry bucket regardless of
    /// row order.
    #[test]
    fn registry_categorization_is_order_independent(
        rows in prop::collection::vec(plan_row(), 1..20),
        rotation in 0..20usize,
    ) {
        let mut rotated = rows.clone();
        rotated.rotate_left(rotation % rows.len());

        let (_, registry_a, mut interner_a) = build(&render_plan(&rows), Dialect::Temporal);
        let (_, registry_b, mut interner_b) = build(&render_plan(&rotated), Dialect::Temporal);

        for (_, name) in interner_a.clone().iter() {
            let a = interner_a.intern(name);
            let b = interner_b.intern(name);
            prop_assert_eq!(registry_a.is_mover(a), registry_b.is_mover(b), "{}", name);
            prop_assert_eq!(registry_a.is_cargo(a), registry_b.is_cargo(b), "{}", name);
        }
    }

    /// The filter and matcher never panic on arbitrary input.
    #[test]
    fn pipeline_survives_arbitrary_text(text in "\\PC{0,400}") {
        for dialect in Dialect::ALL {
            let mut diagnostics = DiagnosticBuffer::default_size();
            if let Ok(lines) = LineFilter::filter(&text, dialect) {
                let matched = ActionLineMatcher::new(dialect)
                    .match_lines(&lines, &mut diagnostics);
                let mut interner = Interner::new();
                let normalizer = PlanNormalizer::new(dialect);
                let (actions, _) =
                    normalizer.normalize(&matched, &mut interner, &mut diagnostics);
                let _ = TimelineAssembler::assemble(actions, dialect);
            }
        }
    }
}
