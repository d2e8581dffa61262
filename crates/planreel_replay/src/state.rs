//! The explicit per-entity state arena.
//!
//! One mutable record per mover and per cargo item, keyed by interned
//! identity. Records are created on `reset()`, mutated only by the
//! scheduler's `step()`/`advance()` path, and discarded on the next
//! `reset()`.
//!
//! A cargo item's whereabouts are a tagged union, so "exactly one of
//! location or carrier at every observable instant" holds structurally
//! rather than by discipline.

use std::collections::HashMap;

use planreel_foundation::NameId;
use planreel_timeline::ActionType;

// =============================================================================
// Mover Records
// =============================================================================

/// What a mover is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoverStatus {
    /// Parked, between actions.
    #[default]
    Idle,
    /// In transit. Both endpoints are always known.
    Moving {
        /// Where the transit started.
        origin: NameId,
        /// Where the transit ends.
        target: NameId,
    },
    /// Taking cargo up.
    Loading,
    /// Setting cargo down.
    Unloading,
}

/// The action a mover is currently executing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveAction {
    /// Timeline index of the action.
    pub index: usize,
    /// The action's family (selects the easing profile).
    pub family: ActionType,
    /// Scheduler clock when the action was applied.
    pub started_at: f64,
    /// Rate-scaled duration in presentation seconds.
    pub duration: f64,
    /// Cargo affected on completion, if any.
    pub cargo: Option<NameId>,
    /// Location the action resolves at, if any.
    pub site: Option<NameId>,
}

/// Live state of one mover.
#[derive(Clone, Debug, Default)]
pub struct MoverRecord {
    /// Current status.
    pub status: MoverStatus,
    /// Current location; `None` only when no evidence ever placed the
    /// mover anywhere.
    pub location: Option<NameId>,
    /// Cargo ids currently aboard, in load order.
    pub carrying: im::Vector<NameId>,
    /// The in-flight action, if any.
    pub active: Option<ActiveAction>,
}

// =============================================================================
// Cargo Records
// =============================================================================

/// Where a cargo item is. Exactly one variant holds at any instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CargoPlace {
    /// Resting at a location.
    AtLocation(NameId),
    /// Aboard a mover.
    Carried(NameId),
    /// Mid hand-off (being unloaded or delivered) by a mover.
    Transferring(NameId),
}

/// Live state of one cargo item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CargoRecord {
    /// Current whereabouts.
    pub place: CargoPlace,
}

impl CargoRecord {
    /// The location, when resting at one.
    #[must_use]
    pub const fn location(&self) -> Option<NameId> {
        match self.place {
            CargoPlace::AtLocation(loc) => Some(loc),
            CargoPlace::Carried(_) | CargoPlace::Transferring(_) => None,
        }
    }

    /// The carrier, when aboard or mid hand-off.
    #[must_use]
    pub const fn carrier(&self) -> Option<NameId> {
        match self.place {
            CargoPlace::AtLocation(_) => None,
            CargoPlace::Carried(id) | CargoPlace::Transferring(id) => Some(id),
        }
    }
}

// =============================================================================
// Replay State
// =============================================================================

/// The arena of per-entity records.
#[derive(Clone, Debug, Default)]
pub struct ReplayState {
    movers: HashMap<NameId, MoverRecord>,
    cargo: HashMap<NameId, CargoRecord>,
}

impl ReplayState {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mover record.
    pub fn insert_mover(&mut self, id: NameId, record: MoverRecord) {
        self.movers.insert(id, record);
    }

    /// Inserts a cargo record.
    pub fn insert_cargo(&mut self, id: NameId, record: CargoRecord) {
        self.cargo.insert(id, record);
    }

    /// Looks up a mover record.
    #[must_use]
    pub fn mover(&self, id: NameId) -> Option<&MoverRecord> {
        self.movers.get(&id)
    }

    /// Looks up a mover record mutably.
    pub fn mover_mut(&mut self, id: NameId) -> Option<&mut MoverRecord> {
        self.movers.get_mut(&id)
    }

    /// Looks up a cargo record.
    #[must_use]
    pub fn cargo(&self, id: NameId) -> Option<&CargoRecord> {
        self.cargo.get(&id)
    }

    /// Looks up a cargo record mutably.
    pub fn cargo_mut(&mut self, id: NameId) -> Option<&mut CargoRecord> {
        self.cargo.get_mut(&id)
    }

    /// Iterates mover ids with in-flight actions.
    pub fn active_movers(&self) -> impl Iterator<Item = NameId> + '_ {
        self.movers
            .iter()
            .filter(|(_, record)| record.active.is_some())
            .map(|(id, _)| *id)
    }

    /// The number of mover records.
    #[must_use]
    pub fn mover_count(&self) -> usize {
        self.movers.len()
    }

    /// The number of cargo records.
    #[must_use]
    pub fn cargo_count(&self) -> usize {
        self.cargo.len()
    }
}

// =============================================================================
// Snapshots
// =============================================================================

/// Presentation-facing view of one mover.
#[derive(Clone, Debug, PartialEq)]
pub struct MoverSnapshot {
    /// Interned identity.
    pub id: NameId,
    /// Current status.
    pub status: MoverStatus,
    /// Current location, if known.
    pub location: Option<NameId>,
    /// Cargo aboard, in load order.
    pub carrying: Vec<NameId>,
    /// Raw elapsed fraction of the in-flight action, in `[0, 1]`.
    pub progress: Option<f64>,
    /// Eased progress of the in-flight action, in `[0, 1]`.
    pub eased_progress: Option<f64>,
}

/// Presentation-facing view of one cargo item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CargoSnapshot {
    /// Interned identity.
    pub id: NameId,
    /// Location, when resting. Mutually exclusive with `carrier`.
    pub location: Option<NameId>,
    /// Carrier, when aboard or mid hand-off.
    pub carrier: Option<NameId>,
    /// True while mid hand-off.
    pub transferring: bool,
}

/// A queryable snapshot of the whole replay.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplaySnapshot {
    /// Presentation clock, in seconds.
    pub clock: f64,
    /// Index of the next action to apply.
    pub next_index: usize,
    /// True once every action has been applied.
    pub completed: bool,
    /// Movers, in registry order.
    pub movers: Vec<MoverSnapshot>,
    /// Cargo items, in registry order.
    pub cargo: Vec<CargoSnapshot>,
}
