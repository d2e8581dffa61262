//! Monotonic easing profiles per action family.
//!
//! Easing is purely a presentation signal: it reshapes the raw elapsed
//! fraction for display and never gates or revises a committed discrete
//! transition.
//!
//! - manipulation families: symmetric ease-in-out (smoothstep)
//! - movement: accelerate / cruise / decelerate three-phase profile
//! - everything else: linear

use planreel_timeline::ActionType;

/// Fraction of a movement spent accelerating (and, symmetrically,
/// decelerating).
const RAMP: f64 = 0.2;

/// Applies the family's easing profile to a raw fraction.
///
/// Input is clamped to `[0, 1]`; output is monotonic with
/// `ease(f, 0) == 0` and `ease(f, 1) == 1`.
#[must_use]
pub fn ease(family: ActionType, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match family {
        ActionType::Move => travel_profile(t),
        family if family.is_manipulation() => smoothstep(t),
        _ => t,
    }
}

/// Symmetric ease-in-out.
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Trapezoidal velocity profile: ramp up over the first [`RAMP`] of the
/// action, cruise, ramp down over the last [`RAMP`]. The returned value
/// is the normalized distance covered.
fn travel_profile(t: f64) -> f64 {
    // Total distance at unit cruise speed: 1 - RAMP (each ramp covers
    // half of what cruising over the same span would).
    let total = 1.0 - RAMP;

    let covered = if t < RAMP {
        t * t / (2.0 * RAMP)
    } else if t <= 1.0 - RAMP {
        RAMP / 2.0 + (t - RAMP)
    } else {
        let remaining = 1.0 - t;
        total - remaining * remaining / (2.0 * RAMP)
    };

    covered / total
}
