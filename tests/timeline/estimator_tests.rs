//! Duration/cost estimator tests: static base-table fallback with no
//! samples, and learned per-name averages when samples exist.

use planreel_foundation::DiagnosticKind;
use planreel_parser::Dialect;
use planreel_timeline::{ActionType, EstimatorConfig};

use crate::common::normalized;

#[test]
fn no_samples_anywhere_uses_the_base_table() {
    // several drive-truck lines, no duration annotation in the file
    let text = "\
0.0: (drive-truck tru1 pos1 pos2)
4.0: (drive-truck tru1 pos2 pos3)
8.0: (drive-truck tru1 pos3 pos4)
";
    let (actions, _, diagnostics) = normalized(text, Dialect::Numerical);

    let config = EstimatorConfig::default();
    let expected = config.move_base * EstimatorConfig::multiplier_for(Dialect::Numerical);
    for action in &actions {
        assert!((action.duration - expected).abs() < 1e-9);
    }
    // the fallback is reported once for the one distinct name
    assert_eq!(diagnostics.count_of(DiagnosticKind::EstimatorFallback), 1);
}

#[test]
fn learned_average_calibrates_unannotated_lines() {
    // three annotated at 4.0, the fourth learns 4.0
    let text = "\
0.0: (drive-truck tru1 pos1 pos2) [duration: 4.0]
4.0: (drive-truck tru1 pos2 pos3) [duration: 4.0]
8.0: (drive-truck tru1 pos3 pos4) [duration: 4.0]
12.0: (drive-truck tru1 pos4 pos5)
";
    let (actions, _, diagnostics) = normalized(text, Dialect::Numerical);

    assert_eq!(actions.len(), 4);
    assert!((actions[3].duration - 4.0).abs() < 1e-9);
    assert_eq!(diagnostics.count_of(DiagnosticKind::EstimatorFallback), 0);
}

#[test]
fn learned_average_is_a_true_mean() {
    let text = "\
0.0: (drive-truck tru1 pos1 pos2) [duration: 2.0]
4.0: (drive-truck tru1 pos2 pos3) [duration: 6.0]
8.0: (drive-truck tru1 pos3 pos4)
";
    let (actions, _, _) = normalized(text, Dialect::Numerical);
    assert!((actions[2].duration - 4.0).abs() < 1e-9);
}

#[test]
fn learning_is_per_action_name() {
    let text = "\
0.0: (drive-truck tru1 pos1 pos2) [duration: 4.0]
4.0: (fly-plane apn1 apt1 apt2)
";
    let (actions, _, _) = normalized(text, Dialect::Numerical);

    // fly-plane has no samples of its own; it falls back to the table,
    // not to drive-truck's average
    let config = EstimatorConfig::default();
    let expected = config.move_base * EstimatorConfig::multiplier_for(Dialect::Numerical);
    assert!((actions[1].duration - expected).abs() < 1e-9);
}

#[test]
fn family_bases_descend_by_typical_duration() {
    let config = EstimatorConfig::default();
    assert!(config.base_for(ActionType::Move) > config.base_for(ActionType::Terminal));
    assert!(config.base_for(ActionType::Terminal) > config.base_for(ActionType::Load));
    assert!(config.base_for(ActionType::Load) > config.base_for(ActionType::Maintenance));
}

#[test]
fn every_action_gets_a_strictly_positive_duration() {
    let text = "\
0: (load obj1 tru1 pos1)
1: (drive tru1 pos1 pos2)
2: (frobnicate quux)
3: (refuel tru1 pos2)
";
    let (actions, _, _) = normalized(text, Dialect::Classical);
    assert_eq!(actions.len(), 4);
    assert!(actions.iter().all(|a| a.duration > 0.0));
}

#[test]
fn explicit_costs_sum_with_learned_and_default() {
    let text = "\
0.0: (drive-truck tru1 pos1 pos2) [cost: 3.0]
4.0: (drive-truck tru1 pos2 pos3)
8.0: (refuel tru1 pos3)
";
    let (actions, _, _) = normalized(text, Dialect::Numerical);

    assert!((actions[0].cost - 3.0).abs() < 1e-9); // explicit
    assert!((actions[1].cost - 3.0).abs() < 1e-9); // learned
    assert!((actions[2].cost - 1.0).abs() < 1e-9); // flat default
}
