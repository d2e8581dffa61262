//! Full-session tests: load, replay, snapshot, restore.

use planreel_parser::Dialect;
use planreel_replay::ReplayConfig;
use planreel_runtime::serialize::{from_bytes, to_bytes};
use planreel_runtime::{PlanSession, SavedReplay};

const PLAN: &str = "\
; solver banner
0: (load obj1 tru1 pos1)
1: (drive tru1 pos1 pos2)
not an action line
2: (unload obj1 tru1 pos2)
";

#[test]
fn load_replay_and_inspect() {
    let mut session = PlanSession::new();
    session.load_text(PLAN, Dialect::Classical, "logistics").unwrap();

    // one junk line became a diagnostic, three actions survived
    assert_eq!(session.scheduler().unwrap().timeline().len(), 3);
    assert_eq!(
        session
            .diagnostics()
            .count_of(planreel_foundation::DiagnosticKind::UnparsableLine),
        1
    );

    while session.step() {}

    let snapshot = session.snapshot().unwrap();
    assert!(snapshot.completed);
    assert_eq!(snapshot.movers.len(), 1);
    assert_eq!(snapshot.cargo.len(), 1);

    // the cargo ends resting, never both placed and carried
    let cargo = &snapshot.cargo[0];
    assert!(cargo.location.is_some());
    assert!(cargo.carrier.is_none());
}

#[test]
fn snapshot_round_trip_through_messagepack() {
    let mut session = PlanSession::new();
    session.load_text(PLAN, Dialect::Classical, "logistics").unwrap();
    session.step();
    let before = session.snapshot().unwrap();

    let bytes = to_bytes(&SavedReplay::capture(&session).unwrap()).unwrap();
    let mut restored = PlanSession::new();
    from_bytes(&bytes)
        .unwrap()
        .resume(&mut restored, ReplayConfig::default());

    assert_eq!(restored.snapshot().unwrap(), before);
}

#[test]
fn play_and_tick_drive_the_session() {
    let mut session = PlanSession::new();
    session
        .load_text(
            "0.0: (move robotA roomA roomB) [2.0]\n2.0: (move robotA roomB roomC) [2.0]",
            Dialect::Temporal,
            "rooms",
        )
        .unwrap();

    session.play(1.0);
    session.tick(2.0);
    session.tick(2.0);

    let snapshot = session.snapshot().unwrap();
    assert!(snapshot.completed);
}

#[test]
fn sessions_are_reloadable() {
    let mut session = PlanSession::new();
    session.load_text(PLAN, Dialect::Classical, "first").unwrap();
    while session.step() {}

    session
        .load_text("0.0: (move r1 a b) [1.0]", Dialect::Temporal, "second")
        .unwrap();

    let snapshot = session.snapshot().unwrap();
    assert!(!snapshot.completed);
    assert_eq!(session.scheduler().unwrap().timeline().len(), 1);
    assert_eq!(session.source_label(), Some("second"));
}

#[test]
fn empty_plan_is_a_loadable_degenerate_case() {
    let mut session = PlanSession::new();
    session
        .load_text("; nothing here\n", Dialect::Temporal, "empty")
        .unwrap();

    let snapshot = session.snapshot().unwrap();
    assert!(snapshot.completed);
    assert!(snapshot.movers.is_empty());
    assert!(!session.step());
}
