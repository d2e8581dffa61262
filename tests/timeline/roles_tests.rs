//! Role extraction tests across the action families.

use planreel_foundation::DiagnosticKind;
use planreel_parser::Dialect;
use planreel_timeline::ActionType;

use crate::common::normalized;

#[test]
fn logistics_round_trip_roles() {
    let text = "\
0: (load obj1 tru1 pos1)
1: (drive tru1 pos1 pos2)
2: (unload obj1 tru1 pos2)
";
    let (actions, mut interner, _) = normalized(text, Dialect::Classical);
    let obj1 = interner.intern("obj1");
    let tru1 = interner.intern("tru1");
    let pos1 = interner.intern("pos1");
    let pos2 = interner.intern("pos2");

    assert_eq!(actions[0].action_type, ActionType::Load);
    assert_eq!(actions[0].roles.cargo, Some(obj1));
    assert_eq!(actions[0].roles.mover, Some(tru1));
    assert_eq!(actions[0].roles.site(), Some(pos1));

    assert_eq!(actions[1].action_type, ActionType::Move);
    assert_eq!(actions[1].roles.mover, Some(tru1));
    assert_eq!(actions[1].roles.origin, Some(pos1));
    assert_eq!(actions[1].roles.destination, Some(pos2));

    assert_eq!(actions[2].action_type, ActionType::Unload);
    assert_eq!(actions[2].roles.cargo, Some(obj1));
    assert_eq!(actions[2].roles.destination, Some(pos2));
}

#[test]
fn verb_families_cover_benchmark_vocabulary() {
    let cases = [
        ("(drive-truck tru1 pos1 pos2 city1)", ActionType::Move),
        ("(fly-airplane apn1 apt1 apt2)", ActionType::Move),
        ("(walk-to robot1 room1 room2)", ActionType::Move),
        ("(load-truck obj1 tru1 pos1)", ActionType::Load),
        ("(pickup-crate crate1 hoist1 depot1)", ActionType::Load),
        ("(board-plane person1 apn1 apt1)", ActionType::Load),
        ("(unload-airplane obj1 apn1 apt2)", ActionType::Unload),
        ("(debark person1 apn1 apt2)", ActionType::Unload),
        ("(deliver obj1 pos1 pos2)", ActionType::Terminal),
        ("(refuel-truck tru1 pos1)", ActionType::Maintenance),
        ("(recharge rover1 base1)", ActionType::Maintenance),
        ("(mysterious-verb tru1 pos1)", ActionType::Unknown),
    ];

    for (line, expected) in cases {
        let text = format!("0: {line}\n");
        let (actions, _, _) = normalized(&text, Dialect::Classical);
        assert_eq!(actions[0].action_type, expected, "{line}");
    }
}

#[test]
fn unknown_family_roles_come_from_naming_patterns() {
    let (actions, mut interner, _) =
        normalized("0: (shuffle tru3 obj9 pos1 pos4)\n", Dialect::Classical);

    assert_eq!(actions[0].action_type, ActionType::Unknown);
    assert_eq!(actions[0].roles.mover, Some(interner.intern("tru3")));
    assert_eq!(actions[0].roles.cargo, Some(interner.intern("obj9")));
    assert_eq!(actions[0].roles.origin, Some(interner.intern("pos1")));
    assert_eq!(actions[0].roles.destination, Some(interner.intern("pos4")));
}

#[test]
fn fully_unresolved_actions_survive_with_null_roles() {
    let (actions, _, diagnostics) = normalized("0: (xyzzy plugh zork)\n", Dialect::Classical);

    // still on the timeline, just inert
    assert_eq!(actions.len(), 1);
    assert!(actions[0].roles.is_empty());
    assert_eq!(diagnostics.count_of(DiagnosticKind::UnresolvedRoles), 1);
}

#[test]
fn wait_actions_have_null_roles() {
    let (actions, _, diagnostics) =
        normalized("5.0: -----waiting---- [10.0]\n", Dialect::Hybrid);

    assert_eq!(actions[0].action_type, ActionType::Wait);
    assert!(actions[0].roles.is_empty());
    assert_eq!(diagnostics.count_of(DiagnosticKind::UnresolvedRoles), 0);
}

#[test]
fn short_parameter_lists_yield_partial_roles() {
    let (actions, mut interner, _) = normalized("0: (load obj1)\n", Dialect::Classical);

    assert_eq!(actions[0].roles.cargo, Some(interner.intern("obj1")));
    assert_eq!(actions[0].roles.mover, None);
    assert_eq!(actions[0].roles.site(), None);
}
