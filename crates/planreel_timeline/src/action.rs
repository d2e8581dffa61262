//! The canonical action model.
//!
//! A [`NormalizedAction`] is immutable once created: the parse pass builds
//! each one exactly once, and the assembled timeline is never mutated
//! during replay.

use planreel_foundation::NameId;
use planreel_parser::ProcessBoundary;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed family an action belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionType {
    /// Spatial relocation of a mover.
    Move,
    /// Cargo taken up by a mover.
    Load,
    /// Cargo set down by a mover.
    Unload,
    /// Terminal/delivery actions (cargo reaches its goal).
    Terminal,
    /// Upkeep actions (refuel, recharge, repair).
    Maintenance,
    /// Entity-free delay.
    Wait,
    /// Unrecognized verb; roles are inferred from naming patterns only.
    Unknown,
}

impl ActionType {
    /// Returns true for the manipulation families (load/unload and
    /// kindred terminal/maintenance handling), which share the symmetric
    /// easing profile.
    #[must_use]
    pub const fn is_manipulation(self) -> bool {
        matches!(self, Self::Load | Self::Unload | Self::Terminal | Self::Maintenance)
    }

    /// Returns the lowercase family name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Load => "load",
            Self::Unload => "unload",
            Self::Terminal => "terminal",
            Self::Maintenance => "maintenance",
            Self::Wait => "wait",
            Self::Unknown => "unknown",
        }
    }
}

/// Resolved semantic roles of an action's parameters.
///
/// Every field may be null; the replay scheduler tolerates and no-ops on
/// missing roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roles {
    /// The entity doing the moving or manipulating.
    pub mover: Option<NameId>,
    /// The entity being carried.
    pub cargo: Option<NameId>,
    /// Where the action starts (or takes place, for loads).
    pub origin: Option<NameId>,
    /// Where the action ends (or takes place, for unloads).
    pub destination: Option<NameId>,
}

impl Roles {
    /// Returns true if no role was resolved.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mover.is_none()
            && self.cargo.is_none()
            && self.origin.is_none()
            && self.destination.is_none()
    }

    /// The single location an in-place action happens at: the
    /// destination if resolved, the origin otherwise.
    #[must_use]
    pub const fn site(&self) -> Option<NameId> {
        match self.destination {
            Some(id) => Some(id),
            None => self.origin,
        }
    }
}

/// One normalized plan action. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizedAction {
    /// Start time (timestamp, or step index for step-indexed dialects).
    pub start: f64,
    /// End time on the shared timeline.
    pub end: f64,
    /// Replay pacing duration in seconds; always strictly positive.
    pub duration: f64,
    /// Action cost (explicit, learned, or the flat default).
    pub cost: f64,
    /// Interned action name.
    pub name: NameId,
    /// The action's family.
    pub action_type: ActionType,
    /// Ordered raw parameter tokens, as they appeared in the plan.
    pub parameters: Vec<String>,
    /// Resolved roles; may be partially or fully null.
    pub roles: Roles,
    /// Process-boundary flag (hybrid dialect).
    pub boundary: ProcessBoundary,
    /// Original appearance order in the input, the sort tie-break.
    pub appearance: u32,
    /// 1-based source line number.
    pub line: u32,
}

impl NormalizedAction {
    /// Returns true if this action overlaps the half-open interval
    /// `[start, end)` of another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
