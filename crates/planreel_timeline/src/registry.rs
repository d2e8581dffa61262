//! Entity registry construction.
//!
//! Scans every resolved role across the whole timeline and inserts each
//! identifier into exactly one of {movers, cargo, locations}, in order of
//! first appearance. Categorization uses the same naming lexicon as role
//! extraction, so the same identifier string always lands in the same
//! bucket regardless of which action first introduced it; only
//! identifiers the lexicon cannot classify fall back to the role slot
//! they first appeared in.

use std::collections::HashSet;

use planreel_foundation::{Interner, NameId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::assemble::Timeline;
use crate::lexicon::{EntityCategory, LocationKind, NamingLexicon};

/// Deduplicated, categorized entities referenced by a timeline.
///
/// Immutable after assembly.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityRegistry {
    movers: im::Vector<NameId>,
    cargo: im::Vector<NameId>,
    locations: im::Vector<NameId>,
    location_kinds: im::HashMap<NameId, LocationKind>,
}

impl EntityRegistry {
    /// Builds the registry from a timeline's resolved roles.
    #[must_use]
    pub fn build(timeline: &Timeline, interner: &Interner, lexicon: &NamingLexicon) -> Self {
        let mut registry = Self::default();
        let mut seen: HashSet<NameId> = HashSet::new();

        for action in timeline.iter() {
            let roles = action.roles;
            let slots = [
                (roles.mover, EntityCategory::Mover),
                (roles.cargo, EntityCategory::Cargo),
                (roles.origin, EntityCategory::Location),
                (roles.destination, EntityCategory::Location),
            ];

            for (id, slot_category) in slots {
                let Some(id) = id else { continue };
                if !seen.insert(id) {
                    continue;
                }
                let category = interner
                    .resolve(id)
                    .and_then(|name| lexicon.classify(name))
                    .unwrap_or(slot_category);
                registry.insert(id, category, interner, lexicon);
            }
        }

        registry
    }

    fn insert(
        &mut self,
        id: NameId,
        category: EntityCategory,
        interner: &Interner,
        lexicon: &NamingLexicon,
    ) {
        match category {
            EntityCategory::Mover => self.movers.push_back(id),
            EntityCategory::Cargo => self.cargo.push_back(id),
            EntityCategory::Location => {
                self.locations.push_back(id);
                let kind = interner
                    .resolve(id)
                    .map_or(LocationKind::Waypoint, |name| lexicon.location_kind(name));
                self.location_kinds.insert(id, kind);
            }
        }
    }

    /// Movers in order of first appearance (cheap structural clone).
    #[must_use]
    pub fn movers(&self) -> im::Vector<NameId> {
        self.movers.clone()
    }

    /// Cargo items in order of first appearance.
    #[must_use]
    pub fn cargo_items(&self) -> im::Vector<NameId> {
        self.cargo.clone()
    }

    /// Locations in order of first appearance.
    #[must_use]
    pub fn locations(&self) -> im::Vector<NameId> {
        self.locations.clone()
    }

    /// The deterministic fallback location: the first one registered.
    #[must_use]
    pub fn first_location(&self) -> Option<NameId> {
        self.locations.front().copied()
    }

    /// The sub-tag of a registered location.
    #[must_use]
    pub fn location_kind(&self, id: NameId) -> Option<LocationKind> {
        self.location_kinds.get(&id).copied()
    }

    /// True if the identifier was registered as a mover.
    #[must_use]
    pub fn is_mover(&self, id: NameId) -> bool {
        self.movers.contains(&id)
    }

    /// True if the identifier was registered as cargo.
    #[must_use]
    pub fn is_cargo(&self, id: NameId) -> bool {
        self.cargo.contains(&id)
    }

    /// Total number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movers.len() + self.cargo.len() + self.locations.len()
    }

    /// True if no entities were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
