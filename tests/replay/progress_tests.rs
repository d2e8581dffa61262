//! Progress reporting and easing profile tests.

use planreel_parser::Dialect;
use planreel_replay::ReplayConfig;
use planreel_replay::easing::ease;
use planreel_timeline::ActionType;

use crate::common::{scheduler, scheduler_with};

#[test]
fn raw_progress_tracks_elapsed_over_duration() {
    let text = "0.0: (move robotA roomA roomB) [4.0]\n";
    let (mut scheduler, mut diagnostics, mut interner) = scheduler(text, Dialect::Temporal);
    let robot = interner.intern("robota");

    scheduler.play(1.0, &mut diagnostics);
    for (dt, expected) in [(1.0, 0.25), (1.0, 0.5), (1.0, 0.75)] {
        scheduler.advance(dt, &mut diagnostics);
        let progress = scheduler.progress_of(robot).unwrap();
        assert!((progress.raw - expected).abs() < 1e-9);
    }
}

#[test]
fn progress_is_clamped_to_unit_range() {
    let text = "\
0.0: (move robotA roomA roomB) [4.0]
10.0: (move robotB roomB roomC) [4.0]
";
    let (mut scheduler, mut diagnostics, mut interner) = scheduler(text, Dialect::Temporal);
    let robot = interner.intern("robota");

    scheduler.step(&mut diagnostics);
    // no clock movement: progress 0
    let progress = scheduler.progress_of(robot).unwrap();
    assert_eq!(progress.raw, 0.0);
    assert_eq!(progress.eased, 0.0);
}

#[test]
fn movement_uses_the_three_phase_profile() {
    let text = "0.0: (move robotA roomA roomB) [10.0]\n";
    let (mut scheduler, mut diagnostics, mut interner) = scheduler(text, Dialect::Temporal);
    let robot = interner.intern("robota");

    scheduler.play(1.0, &mut diagnostics);
    scheduler.advance(1.0, &mut diagnostics); // raw 0.1, inside the ramp

    let progress = scheduler.progress_of(robot).unwrap();
    assert!((progress.eased - ease(ActionType::Move, 0.1)).abs() < 1e-9);
    // accelerating: the eased position lags the raw clock early on
    assert!(progress.eased < progress.raw);
}

#[test]
fn manipulation_uses_symmetric_ease_in_out() {
    let text = "0.0: (load obj1 tru1 pos1) [2.0]\n";
    let (mut scheduler, mut diagnostics, mut interner) = scheduler(text, Dialect::Temporal);
    let tru1 = interner.intern("tru1");

    scheduler.play(1.0, &mut diagnostics);
    scheduler.advance(1.0, &mut diagnostics); // raw 0.5

    let progress = scheduler.progress_of(tru1).unwrap();
    assert!((progress.raw - 0.5).abs() < 1e-9);
    // smoothstep(0.5) == 0.5: the midpoint is fixed for the symmetric curve
    assert!((progress.eased - 0.5).abs() < 1e-9);
}

#[test]
fn easing_can_be_disabled() {
    let config = ReplayConfig::default().with_easing(false);
    let text = "0.0: (move robotA roomA roomB) [10.0]\n";
    let (mut scheduler, mut diagnostics, mut interner) =
        scheduler_with(text, Dialect::Temporal, config);
    let robot = interner.intern("robota");

    scheduler.play(1.0, &mut diagnostics);
    scheduler.advance(1.0, &mut diagnostics);

    let progress = scheduler.progress_of(robot).unwrap();
    assert_eq!(progress.raw, progress.eased);
}

#[test]
fn idle_movers_report_no_progress() {
    let text = "\
0.0: (move robotA roomA roomB) [2.0]
10.0: (move robotB roomB roomC) [2.0]
";
    let (mut scheduler, mut diagnostics, mut interner) = scheduler(text, Dialect::Temporal);
    let robot_b = interner.intern("robotb");

    scheduler.step(&mut diagnostics);
    // robotB has not acted yet
    assert!(scheduler.progress_of(robot_b).is_none());
}

#[test]
fn snapshot_carries_progress_for_in_flight_movers() {
    let text = "0.0: (move robotA roomA roomB) [4.0]\n";
    let (mut scheduler, mut diagnostics, mut interner) = scheduler(text, Dialect::Temporal);
    let robot = interner.intern("robota");

    scheduler.play(1.0, &mut diagnostics);
    scheduler.advance(2.0, &mut diagnostics);

    let snapshot = scheduler.snapshot();
    let mover = snapshot.movers.iter().find(|m| m.id == robot).unwrap();
    assert!((mover.progress.unwrap() - 0.5).abs() < 1e-9);
    assert!(mover.eased_progress.is_some());
}
